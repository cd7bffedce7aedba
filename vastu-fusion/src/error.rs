//! Error types for VastuFusion

use std::time::Duration;

use crate::config::ConfigLoadError;
use crate::core::Point3;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// VastuFusion error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No scanner readings were supplied
    #[error("No scanner readings to register")]
    EmptyInput,

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),

    /// A full pass merged nothing: the remaining scanners share no verified
    /// overlap with the universe
    #[error(
        "Cannot register scanners [{}]; merged so far: [{}]",
        .unmerged.join(", "),
        .merged.join(", ")
    )]
    Unregistrable {
        /// Scanners already in the universe
        merged: Vec<String>,
        /// Scanners left over
        unmerged: Vec<String>,
    },

    /// The wall-clock budget ran out before registration finished
    #[error(
        "Time budget exceeded after {elapsed:?}; unmerged scanners: [{}]",
        .unmerged.join(", ")
    )]
    TimeBudgetExceeded {
        /// Time spent when the budget check fired
        elapsed: Duration,
        /// Scanners already in the universe
        merged: Vec<String>,
        /// Scanners left over
        unmerged: Vec<String>,
    },

    /// A reading carries a coordinate beyond `Point3::COORD_LIMIT`
    #[error("Scanner {scanner} reports beacon {beacon} outside the coordinate range")]
    CoordinateOutOfRange {
        /// Scanner name
        scanner: String,
        /// Offending beacon
        beacon: Point3,
    },

    /// Malformed scanner report
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A worker thread could not be started or panicked
    #[error("Worker error: {0}")]
    Worker(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Names of scanners that did not make it into the universe, if any.
    pub fn unmerged(&self) -> &[String] {
        match self {
            Error::Unregistrable { unmerged, .. } | Error::TimeBudgetExceeded { unmerged, .. } => {
                unmerged
            }
            _ => &[],
        }
    }
}
