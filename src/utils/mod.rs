//! Utils module - Shared utilities and helpers
//!
//! Helpers used across layers: validation of configured words, date
//! formatting, nested map merging and console logging.

/// Input validation and sanitization utilities
pub mod validation;

/// Date formatting and interval arithmetic
pub mod date;

/// Nested map merge and flatten
pub mod data;

/// Verbose console output
pub mod logging;
