//! Error types for thorin_cn
//!
//! Component interaction never fails; only configuration does.

use thiserror::Error;

/// Component configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Two options share the same value
    #[error("Duplicate option value: {0:?}")]
    DuplicateValue(String),

    /// A TOML or JSON definition could not be parsed
    #[error("Invalid select definition: {0}")]
    Config(String),
}

impl From<toml::de::Error> for SelectError {
    fn from(err: toml::de::Error) -> Self {
        SelectError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SelectError {
    fn from(err: serde_json::Error) -> Self {
        SelectError::Config(err.to_string())
    }
}

/// Result type for thorin_cn operations
pub type Result<T> = std::result::Result<T, SelectError>;
