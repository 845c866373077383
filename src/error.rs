use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("AmountError: {0}")]
    Amount(#[from] AmountError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("Amount must not be negative: {value}")]
    Negative { value: String },
    #[error("Amount must be a finite number")]
    NotFinite,
    #[error("Amount {value} is too large (maximum {max})")]
    OutOfRange { value: String, max: u64 },
    #[error("Cannot parse amount '{input}'")]
    Parse { input: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("JSON output failed: {0}")]
    Json(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown currency: {code}")]
    UnknownCurrency { code: String, available: Vec<String> },
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Date out of range: {message}")]
    DateOutOfRange { message: String },
    #[error("Cannot parse date '{input}'")]
    DateParse { input: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Amount(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                _ => ErrorSeverity::High,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Amount(AmountError::Negative { value }) => {
                format!("Negative amounts cannot be spelled out: {}", value)
            }
            AppError::Config(ConfigError::UnknownCurrency { code, .. }) => {
                format!("Currency {} is not configured", code)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::UnknownCurrency { available, .. }) => Some(format!(
                "Available currencies: {}. Add more under [currencies] in config.toml",
                available.join(", ")
            )),
            AppError::Config(ConfigError::UnknownKey { .. }) => {
                Some("'propis config set default_currency <CODE>' is the only settable key".to_string())
            }
            AppError::Amount(AmountError::Parse { .. }) => {
                Some("Use digits with an optional '.' or ',' decimal separator, e.g. 1234.56".to_string())
            }
            AppError::Utils(UtilsError::DateParse { .. }) => {
                Some("Dates look like 2024-01-31 or 2024-01-31 12:00:00".to_string())
            }
            _ => None,
        }
    }
}
