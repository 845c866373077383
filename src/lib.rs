pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Amounts, numeral table, localizer
pub mod storage; // Configuration file

/// Support modules (used across layers)
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Dates, map merging, validation, logging

pub use crate::core::{Amount, NumeralLocalizer, to_words};

pub type Result<T> = std::result::Result<T, AppError>;
