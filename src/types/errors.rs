//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the Toolshelf core.
#[derive(Error, Debug)]
pub enum Error {
    /// Precondition violations (empty catalog for a random pick, bad input).
    #[error("validation error: {0}")]
    Validation(String),

    /// A requested record or visible slot does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Catalog/config deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors (catalog file, config file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::validation("catalog is empty").to_string(),
            "validation error: catalog is empty"
        );
        assert_eq!(
            Error::not_found("no visible tool at index 7").to_string(),
            "not found: no visible tool at index 7"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let wrapped: Error = err.into();
        assert!(matches!(wrapped, Error::Serialization(_)));
    }
}
