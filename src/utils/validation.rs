//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user-supplied configuration
//! values before they reach the localizer.

use crate::error::UtilsError;

/// Validate a currency code: three to eight ASCII letters, upper case.
pub fn validate_currency_code(code: &str) -> Result<(), UtilsError> {
    if code.is_empty() {
        return Err(UtilsError::Validation {
            message: "Currency code cannot be empty".to_string(),
        });
    }

    if !(3..=8).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(UtilsError::Validation {
            message: format!(
                "Invalid currency code '{}': use 3 to 8 upper-case Latin letters",
                code
            ),
        });
    }

    Ok(())
}

/// Validate a single word form used in output.
pub fn validate_word(word: &str) -> Result<(), UtilsError> {
    if word.trim().is_empty() {
        return Err(UtilsError::Validation {
            message: "word form cannot be empty".to_string(),
        });
    }

    // Words are joined with single spaces, so inner whitespace would split a token
    if word.chars().any(char::is_whitespace) {
        return Err(UtilsError::Validation {
            message: format!("word form '{}' must not contain whitespace", word),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_currency_code_accepts_valid_codes() {
        assert!(validate_currency_code("RUB").is_ok());
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("USDT").is_ok());
    }

    #[test]
    fn test_validate_currency_code_rejects_invalid_codes() {
        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("rub").is_err());
        assert!(validate_currency_code("RU").is_err());
        assert!(validate_currency_code("RUB1").is_err());
    }

    #[test]
    fn test_validate_word() {
        assert!(validate_word("рубль").is_ok());
        assert!(validate_word("").is_err());
        assert!(validate_word("   ").is_err());
        assert!(validate_word("два слова").is_err());
    }
}
