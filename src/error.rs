//! Error types for generation and battle resolution.

use thiserror::Error;

/// Everything that can go wrong inside the core.
///
/// These are programmer or configuration errors. Nothing here is retried.
#[derive(Error, Debug)]
pub enum StraysError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("empty encounter: {0}")]
    EmptyEncounter(String),

    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl StraysError {
    pub fn config(message: impl Into<String>) -> Self {
        StraysError::InvalidConfiguration(message.into())
    }

    pub fn input(message: impl Into<String>) -> Self {
        StraysError::InvalidInput(message.into())
    }

    pub fn empty(message: impl Into<String>) -> Self {
        StraysError::EmptyEncounter(message.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StraysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StraysError::config("no themes").to_string(),
            "invalid configuration: no themes"
        );
        assert_eq!(
            StraysError::input("size -1").to_string(),
            "invalid input: size -1"
        );
        assert_eq!(
            StraysError::empty("no enemies").to_string(),
            "empty encounter: no enemies"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let err: StraysError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, StraysError::ConfigParse(_)));
    }
}
