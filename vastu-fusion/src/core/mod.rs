//! Core types for VastuFusion.
//!
//! Everything here is plain data with exact integer arithmetic:
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`Point3`]: Integer beacon offset, scanner position or translation
//! - [`Axis`]: One of X, Y, Z
//!
//! ### Orientation
//! - [`Rotation`]: Axis-aligned 3x3 rotation matrix
//! - [`RotationGroup`]: The 24 orientations a scanner can have
//!
//! ### Clouds
//! - [`ScannerReading`]: Raw named list of beacons from one scanner
//! - [`PointCloud`]: Immutable beacon set plus the probes that observed it
//! - [`AxisSignature`]: Per-axis histogram used to propose translations
//!
//! ## Frames
//!
//! Each reading lives in its scanner's frame, with the scanner at the origin.
//! A merged cloud lives in the frame of the first cloud it was built from;
//! its probes record where every contributing scanner sits in that frame.

mod cloud;
mod point;
mod rotation;
mod signature;

pub use cloud::{PointCloud, Probe, ScannerReading};
pub use point::{Axis, ParsePointError, Point3};
pub use rotation::{ROTATION_COUNT, Rotation, RotationGroup};
pub use signature::{AxisCandidate, AxisSignature, OffsetSearch};
