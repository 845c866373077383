//! Storage layer for propis
//!
//! Handles the TOML configuration file: default currency and user-defined
//! currency nouns.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
