//! Pairwise cloud alignment.
//!
//! Given a fixed cloud and a candidate cloud already turned into one of the
//! 24 orientations, find the translation that makes them agree.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`Aligner`] | Signature correlation plus overlap and visibility checks |
//! | [`AlignerConfig`] | Overlap threshold, detection range, search mode |
//! | [`CloudMatcher`] | Seam the registration driver aligns through |
//! | [`RejectionReason`] | Why a translation or an orientation failed |
//!
//! ## Pipeline
//!
//! ```text
//! fixed, candidate
//!        │
//!        ▼
//! per-axis signatures ──► shifts with ≥ min_overlap coincidences (X, Y, Z)
//!        │
//!        ▼
//! cross product, strongest first
//!        │
//!        ▼
//! for each translation:
//!   shared beacons ≥ min_overlap?
//!   no probe on either side misses a beacon in its range?
//!        │
//!        ▼
//! Alignment { translation, merged }
//! ```

mod aligner;
mod config;
mod traits;
mod types;

pub use aligner::Aligner;
pub use config::{AlignerConfig, SearchMode};
pub use traits::CloudMatcher;
pub use types::{Alignment, RejectionReason, Side, TranslationCandidate};
