use thiserror::Error;

use crate::domain::key::SettingKey;
use crate::domain::value::SettingType;

/// Domain-level errors for SettingView.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid binding for {item}: {reason}")]
    InvalidBinding { item: String, reason: String },

    #[error("No value or default registered for {0}")]
    MissingKey(SettingKey),

    #[error("Type mismatch for {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: SettingKey,
        expected: SettingType,
        found: String,
    },

    #[error("Invalid setting key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl DomainError {
    /// Build an `InvalidBinding` error for the item with the given title.
    pub fn invalid_binding(item: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidBinding {
            item: item.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
