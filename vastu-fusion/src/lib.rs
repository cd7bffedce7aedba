//! # VastuFusion
//!
//! Registration of unaligned 3D beacon scans into a single map.
//!
//! ## Overview
//!
//! Each scanner reports the beacons it can see, relative to itself, in one
//! of 24 unknown axis-aligned orientations. VastuFusion recovers every
//! scanner's orientation and position relative to the first scanner by
//! finding pairs that share enough beacons, and folds all reports into one
//! de-duplicated beacon map.
//!
//! ## Features
//!
//! - **Exact arithmetic**: integer points, integer rotation matrices
//! - **Signature matching**: per-axis histograms propose translations
//! - **Visibility checks**: a match is rejected if a scanner should have
//!   seen a beacon it never reported
//! - **Parallel passes**: optional worker pool per registration pass
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_fusion::{Registrar, io::read_report};
//!
//! let readings = read_report(Path::new("scanners.txt"))?;
//! let registration = Registrar::default().register(readings)?;
//!
//! println!("{} beacons", registration.beacon_count());
//! println!("{} max scanner distance", registration.max_probe_distance());
//! ```
//!
//! ## Coordinate System
//!
//! The universe frame is the first reading's frame: its scanner sits at the
//! origin with its own axes. Detection range is a box test (every axis
//! within range), not a sphere.

#![warn(missing_docs)]

// Core types
pub mod core;

// Unified configuration
pub mod config;

// Pairwise alignment
pub mod matching;

// Multi-scanner registration driver
pub mod registration;

// Report parsing and summaries
pub mod io;

/// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{Axis, Point3, PointCloud, Rotation, RotationGroup, ScannerReading};

pub use config::{ConfigLoadError, FusionConfig};
pub use error::{Error, Result};
pub use matching::{Aligner, AlignerConfig, Alignment, CloudMatcher};
pub use registration::{MergeRecord, Registrar, Registration, RegistrationConfig};
