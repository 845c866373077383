//! Core layer: amount validation, the numeral word table and the localizer.

pub mod amount;
pub mod currency;
pub mod lexicon;
pub mod localizer;

pub use amount::Amount;
pub use currency::{Currency, Unit};
pub use lexicon::{Gender, Lexicon, PluralForm, Scale, WordForms};
pub use localizer::{NumeralLocalizer, ZERO_MINOR, to_words};
