//! Error handling for Easel
//!
//! Store operations on the canvas never fail loudly: missing ids, empty
//! selections and exhausted history are reported through return values.
//! The error types here cover the fallible edges of the system:
//! - Storage errors (document persistence)
//! - Configuration errors (settings files and validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Document storage error type
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    /// The document file exists but could not be parsed
    #[error("Corrupt document at {path}: {reason}")]
    Corrupt {
        /// Path of the document.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The document was written by a newer format version
    #[error("Unsupported document version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Highest version this build reads.
        supported: u32,
    },

    /// Generic storage error
    #[error("Storage error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// Unknown config file extension
    #[error("Config file must be .json or .toml, got {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A setting failed validation
    #[error("Invalid setting {key}: {reason}")]
    Invalid {
        /// Dotted setting key, e.g. `history.max_size`.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Parse failure
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Main error type for Easel
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Shorthand for a validation failure on a single setting
    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Config(ConfigError::Invalid {
            key: key.into(),
            reason: reason.into(),
        })
    }

    /// Check if this is a storage error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type alias for Easel operations
pub type Result<T> = std::result::Result<T, Error>;
