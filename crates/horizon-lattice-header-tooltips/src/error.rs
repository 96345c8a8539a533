//! Error types for loading grid configuration.
//!
//! The tooltip plugin itself never fails: malformed settings degrade to
//! "no tooltip". Only reading the host configuration from text or files can
//! produce an error.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading [`GridSettings`](crate::GridSettings).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read grid settings '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON syntax or shape error.
    #[error("Invalid JSON grid settings: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML syntax or shape error.
    #[error("Invalid TOML grid settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a known format.
    #[error("Unsupported grid settings format for '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
