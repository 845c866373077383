//! Russian numeral word table
//!
//! The table is plain immutable data. A [`Lexicon`] is built once and then
//! only read, so a single instance can be shared between threads freely.

use super::currency::Currency;
use serde::{Deserialize, Serialize};

/// Grammatical number used after a numeral.
///
/// Russian picks the noun form from the last counted value:
/// 1 -> singular, 2..=4 -> "few", everything else (0, 5..=20) -> "many".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Few,
    Many,
}

impl PluralForm {
    /// Select the form for an already reduced count (0..=19).
    ///
    /// Callers strip hundreds and tens first, so 21 arrives here as 1 and
    /// 112 arrives as 12.
    pub fn for_count(count: u64) -> Self {
        match count {
            1 => PluralForm::One,
            2..=4 => PluralForm::Few,
            _ => PluralForm::Many,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

/// The three declined forms of a noun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForms {
    pub one: String,
    pub few: String,
    pub many: String,
}

impl WordForms {
    pub fn new(one: &str, few: &str, many: &str) -> Self {
        Self {
            one: one.to_string(),
            few: few.to_string(),
            many: many.to_string(),
        }
    }

    pub fn select(&self, form: PluralForm) -> &str {
        match form {
            PluralForm::One => &self.one,
            PluralForm::Few => &self.few,
            PluralForm::Many => &self.many,
        }
    }
}

/// Large scale groups, named by their own declined noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Billion,
    Million,
    Thousand,
}

impl Scale {
    /// Scales in the order they are spelled out.
    pub const DESCENDING: [Scale; 3] = [Scale::Billion, Scale::Million, Scale::Thousand];

    pub fn divisor(self) -> u64 {
        match self {
            Scale::Billion => 1_000_000_000,
            Scale::Million => 1_000_000,
            Scale::Thousand => 1_000,
        }
    }

    pub fn gender(self) -> Gender {
        match self {
            Scale::Thousand => Gender::Feminine,
            Scale::Million | Scale::Billion => Gender::Masculine,
        }
    }
}

const ONES: [&str; 19] = [
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const ONES_FEMININE: [&str; 2] = ["одна", "две"];

const TENS: [&str; 8] = [
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const HUNDREDS: [&str; 9] = [
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

#[derive(Debug, Clone)]
pub struct Lexicon {
    thousand: WordForms,
    million: WordForms,
    billion: WordForms,
    currency: Currency,
}

impl Lexicon {
    /// Russian numerals with rubles and kopecks as the unit nouns.
    pub fn russian() -> Self {
        Self {
            thousand: WordForms::new("тысяча", "тысячи", "тысяч"),
            million: WordForms::new("миллион", "миллиона", "миллионов"),
            billion: WordForms::new("миллиард", "миллиарда", "миллиардов"),
            currency: Currency::rub(),
        }
    }

    /// Same numerals, different unit nouns.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Word for 1..=19. Only 1 and 2 have distinct feminine forms.
    pub fn ones(&self, n: u64, gender: Gender) -> Option<&'static str> {
        if gender == Gender::Feminine && (1..=2).contains(&n) {
            return ONES_FEMININE.get(n as usize - 1).copied();
        }
        match n {
            1..=19 => ONES.get(n as usize - 1).copied(),
            _ => None,
        }
    }

    /// Word for `digit` tens, 2..=9.
    pub fn tens(&self, digit: u64) -> Option<&'static str> {
        match digit {
            2..=9 => TENS.get(digit as usize - 2).copied(),
            _ => None,
        }
    }

    /// Word for `digit` hundreds, 1..=9.
    pub fn hundreds(&self, digit: u64) -> Option<&'static str> {
        match digit {
            1..=9 => HUNDREDS.get(digit as usize - 1).copied(),
            _ => None,
        }
    }

    pub fn scale(&self, scale: Scale) -> &WordForms {
        match scale {
            Scale::Billion => &self.billion,
            Scale::Million => &self.million,
            Scale::Thousand => &self.thousand,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::russian()
    }
}
