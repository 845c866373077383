use super::lexicon::{Gender, WordForms};
use crate::error::UtilsError;
use crate::utils::validation::{validate_currency_code, validate_word};
use serde::{Deserialize, Serialize};

/// A currency unit noun. Gender decides between "одна/две" and "один/два".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(flatten)]
    pub forms: WordForms,
    pub gender: Gender,
}

impl Unit {
    pub fn new(forms: WordForms, gender: Gender) -> Self {
        Self { forms, gender }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    /// Whole units, e.g. rubles
    pub major: Unit,
    /// Hundredths, e.g. kopecks
    pub minor: Unit,
}

impl Currency {
    pub const RUB: &'static str = "RUB";

    pub fn new(code: impl Into<String>, major: Unit, minor: Unit) -> Self {
        Self {
            code: code.into(),
            major,
            minor,
        }
    }

    pub fn rub() -> Self {
        Self::new(
            Self::RUB,
            Unit::new(
                WordForms::new("рубль", "рубля", "рублей"),
                Gender::Masculine,
            ),
            Unit::new(
                WordForms::new("копейка", "копейки", "копеек"),
                Gender::Feminine,
            ),
        )
    }

    /// Reject blank codes and blank word forms before they reach output.
    pub fn validate(&self) -> Result<(), UtilsError> {
        validate_currency_code(&self.code)?;
        for (unit_name, unit) in [("major", &self.major), ("minor", &self.minor)] {
            for word in [&unit.forms.one, &unit.forms.few, &unit.forms.many] {
                validate_word(word).map_err(|e| UtilsError::Validation {
                    message: format!("{} {} unit: {}", self.code, unit_name, e),
                })?;
            }
        }
        Ok(())
    }
}
