use super::amount::Amount;
use super::lexicon::{Gender, Lexicon, PluralForm, Scale, WordForms};
use crate::error::AmountError;
use std::sync::LazyLock;

/// Printed in place of words when there are no hundredths.
pub const ZERO_MINOR: &str = "00";

static RUSSIAN_RUB: LazyLock<NumeralLocalizer> =
    LazyLock::new(|| NumeralLocalizer::new(Lexicon::russian()));

/// Spells amounts out in Russian words with correctly declined nouns.
#[derive(Debug, Clone)]
pub struct NumeralLocalizer {
    lexicon: Lexicon,
}

impl NumeralLocalizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Shared instance for rubles.
    pub fn russian() -> &'static NumeralLocalizer {
        &RUSSIAN_RUB
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Word tokens for `amount`, largest scale first.
    ///
    /// A zero whole part still names the major unit, and a zero minor part
    /// is written as `00` followed by the minor unit:
    ///
    /// ```
    /// use propis::core::{Amount, NumeralLocalizer};
    ///
    /// let amount = Amount::new(1000, 0).unwrap();
    /// assert_eq!(
    ///     NumeralLocalizer::russian().words(amount),
    ///     vec!["одна", "тысяча", "рублей", "00", "копеек"]
    /// );
    /// ```
    pub fn words(&self, amount: Amount) -> Vec<&str> {
        let currency = self.lexicon.currency();
        log::debug!("spelling {} {}", amount, currency.code);

        let mut tokens = Vec::new();
        let mut rest = amount.major();

        for scale in Scale::DESCENDING {
            let divisor = scale.divisor();
            if rest < divisor {
                continue;
            }
            let count = rest / divisor;
            rest %= divisor;
            self.spell_group(count, scale.gender(), self.lexicon.scale(scale), &mut tokens);
        }

        // Exact multiples of a thousand end with the bare unit noun
        if rest == 0 {
            tokens.push(currency.major.forms.select(PluralForm::Many));
        } else {
            self.spell_group(rest, currency.major.gender, &currency.major.forms, &mut tokens);
        }

        let minor = u64::from(amount.minor());
        if minor == 0 {
            tokens.push(ZERO_MINOR);
            tokens.push(currency.minor.forms.select(PluralForm::Many));
        } else {
            self.spell_group(minor, currency.minor.gender, &currency.minor.forms, &mut tokens);
        }

        tokens
    }

    pub fn to_words(&self, amount: Amount) -> String {
        self.words(amount).join(" ")
    }

    /// Spell a 1..=999 count followed by `noun` declined for it.
    fn spell_group<'a>(
        &'a self,
        mut count: u64,
        gender: Gender,
        noun: &'a WordForms,
        out: &mut Vec<&'a str>,
    ) {
        if count >= 100 {
            out.extend(self.lexicon.hundreds(count / 100));
            count %= 100;
        }
        if count >= 20 {
            out.extend(self.lexicon.tens(count / 10));
            count %= 10;
        }
        if count > 0 {
            out.extend(self.lexicon.ones(count, gender));
        }
        out.push(noun.select(PluralForm::for_count(count)));
    }
}

/// Spell a ruble amount given as a float.
///
/// ```
/// assert_eq!(propis::core::to_words(21.5).unwrap(), "двадцать один рубль пятьдесят копеек");
/// ```
pub fn to_words(amount: f64) -> Result<String, AmountError> {
    let amount = Amount::from_f64(amount)?;
    Ok(NumeralLocalizer::russian().to_words(amount))
}
