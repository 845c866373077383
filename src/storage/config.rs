use super::Result;
use crate::core::{Currency, Unit};
use crate::error::{ConfigError, StorageError};
use crate::utils::data;
use crate::utils::validation::validate_currency_code;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_CURRENCY_KEY: &str = "default_currency";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub default_currency: Option<String>,
    #[serde(default)]
    pub currencies: HashMap<String, CurrencyConfig>,
}

/// Unit nouns for one currency, keyed by code in [`Config::currencies`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrencyConfig {
    pub major: Unit,
    pub minor: Unit,
}

impl From<&Currency> for CurrencyConfig {
    fn from(currency: &Currency) -> Self {
        Self {
            major: currency.major.clone(),
            minor: currency.minor.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let rub = Currency::rub();
        let mut currencies = HashMap::new();
        currencies.insert(rub.code.clone(), CurrencyConfig::from(&rub));

        Self {
            default_currency: Some(rub.code),
            currencies,
        }
    }
}

impl Config {
    /// Load the file at `path` (or the per-user default location) on top of
    /// the built-in defaults. A missing file yields the defaults unchanged.
    ///
    /// Because the file is merged rather than substituted, a user can
    /// override a single RUB word form without restating the others.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let mut user: toml::Table =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("{}: {}", config_path.display(), e),
            })?;
        upper_case_currency_codes(&mut user);

        let mut merged = Self::default().to_table()?;
        data::merge(&mut merged, user);

        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| StorageError::ConfigParseError {
                message: format!("{}: {}", config_path.display(), e),
            })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|e| StorageError::ConfigSaveFailed {
                message: e.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(config_dir.join("propis").join("config.toml"))
    }

    /// The config as a TOML table, for merging and for `config show`.
    pub fn to_table(&self) -> Result<toml::Table> {
        match toml::Value::try_from(self) {
            Ok(toml::Value::Table(table)) => Ok(table),
            Ok(_) => Err(StorageError::ConfigSaveFailed {
                message: "configuration did not serialize to a table".to_string(),
            }),
            Err(e) => Err(StorageError::ConfigSaveFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Sorted list of configured currency codes.
    pub fn currency_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.currencies.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Resolve `code`, falling back to the default currency, then RUB.
    pub fn currency(&self, code: Option<&str>) -> std::result::Result<Currency, ConfigError> {
        let code = code
            .or(self.default_currency.as_deref())
            .unwrap_or(Currency::RUB)
            .to_uppercase();

        let entry = self
            .currencies
            .get(&code)
            .ok_or_else(|| ConfigError::UnknownCurrency {
                code: code.clone(),
                available: self.currency_codes(),
            })?;

        let currency = Currency::new(code, entry.major.clone(), entry.minor.clone());
        currency
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                field: format!("currencies.{}", currency.code),
                value: currency.code.clone(),
                reason: e.to_string(),
            })?;

        Ok(currency)
    }

    /// Set a user-facing key. Only `default_currency` is settable.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            DEFAULT_CURRENCY_KEY => {
                let code = value.trim().to_uppercase();
                validate_currency_code(&code).map_err(|e| ConfigError::InvalidValue {
                    field: key.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
                if !self.currencies.contains_key(&code) {
                    return Err(ConfigError::UnknownCurrency {
                        code,
                        available: self.currency_codes(),
                    });
                }
                self.default_currency = Some(code);
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey {
                key: key.to_string(),
            }),
        }
    }
}

/// Lookups upper-case the requested code, so `[currencies.usd]` must land
/// under `USD`. Entries that differ only in case are merged.
fn upper_case_currency_codes(table: &mut toml::Table) {
    let Some(toml::Value::Table(currencies)) = table.get_mut("currencies") else {
        return;
    };

    let mut normalized = toml::Table::new();
    for (code, entry) in std::mem::take(currencies) {
        let mut single = toml::Table::new();
        single.insert(code.to_uppercase(), entry);
        data::merge(&mut normalized, single);
    }
    *currencies = normalized;
}
