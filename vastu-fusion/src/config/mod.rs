//! Unified configuration loading for VastuFusion.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_fusion::config::FusionConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = FusionConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = FusionConfig::default();
//!
//! let registrar = Registrar::from_config(&config)?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | `alignment` | Overlap threshold, detection range, shift search |
//! | `registration` | Worker threads, wall-clock budget |
//!
//! ## Example YAML
//!
//! ```yaml
//! alignment:
//!   min_overlap: 12         # shared beacons required
//!   detection_range: 1000   # per-axis scanner range
//!   search_mode: key_pairs  # or: sweep
//!
//! registration:
//!   workers: 4
//!   time_budget_ms: 30000
//! ```

mod error;
mod fusion;

pub use error::ConfigLoadError;
pub use fusion::{DEFAULT_CONFIG_PATH, FusionConfig};
