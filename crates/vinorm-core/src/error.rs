//! Unified error types for the normalizer.
//!
//! Only construction-time code returns these. Normalizing text never fails;
//! see `TextNormalizer::normalize`.

use std::path::PathBuf;

use crate::types::Category;

/// Main error type for loading and configuring the normalizer.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// A rule, mapping or dictionary file could not be read.
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern did not compile.
    #[error("invalid {category} pattern `{pattern}`: {message}")]
    Pattern {
        category: Category,
        pattern: String,
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create a load error for a file path.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    /// Create a pattern error.
    pub fn pattern(
        category: Category,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Pattern {
            category,
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for NormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
