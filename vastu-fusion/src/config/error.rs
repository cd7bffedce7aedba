//! Configuration loading errors.

use std::path::PathBuf;

/// Failure to read or parse a fusion config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// The file could not be read
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
    /// The YAML did not match the config schema
    Parse(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            ConfigLoadError::Parse(msg) => write!(f, "invalid YAML: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
