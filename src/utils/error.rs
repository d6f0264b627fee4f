use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP error for {date}: status {status}")]
    HttpStatusError { date: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDateError { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Where an error came from. Only `Config` errors ever stop the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    StoreLoad,
    Storage,
    Config,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ApiError(_) | SyncError::HttpStatusError { .. } => ErrorCategory::Fetch,
            SyncError::SerializationError(_) | SyncError::InvalidDateError { .. } => {
                ErrorCategory::StoreLoad
            }
            SyncError::IoError(_) => ErrorCategory::Storage,
            SyncError::ConfigError { .. } | SyncError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting `{}`: {}", field, reason)
            }
            SyncError::ConfigError { message } => format!("Configuration problem: {}", message),
            other => other.to_string(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        SyncError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
