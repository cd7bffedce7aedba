//! Alignment result types.

use std::fmt;

use crate::core::{Axis, Point3, PointCloud};

/// A verified alignment of a candidate cloud onto a fixed cloud.
#[derive(Clone, Debug)]
pub struct Alignment {
    /// Vector added to candidate points to express them in the fixed frame.
    /// Equal to the candidate scanner's position in the fixed frame.
    pub translation: Point3,
    /// Number of beacons the two clouds share under this translation.
    pub shared: usize,
    /// Translation candidates examined, including the accepted one.
    pub candidates_tried: usize,
    /// Fused cloud in the fixed frame.
    pub merged: PointCloud,
}

/// Which side of an alignment a check was made from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The cloud being aligned against
    Fixed,
    /// The cloud being moved
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Fixed => f.write_str("fixed"),
            Side::Candidate => f.write_str("candidate"),
        }
    }
}

/// Why a translation candidate (or a whole alignment) was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectionReason {
    /// No shift on this axis reaches the overlap threshold
    NoAxisCandidates(Axis),
    /// Per-axis overlap was real but too few points coincide in 3D
    InsufficientOverlap {
        /// Beacons shared under the candidate translation
        shared: usize,
    },
    /// A scanner on `observer`'s side should have seen this beacon
    HiddenBeacon {
        /// Side whose scanner failed to report the beacon
        observer: Side,
        /// Beacon position in the observer's frame
        beacon: Point3,
    },
    /// The translation would move a candidate beacon outside the `i32` frame
    CoordinateOverflow,
    /// Every translation candidate was rejected
    Exhausted {
        /// Candidates examined
        tried: usize,
        /// How many failed the overlap count
        insufficient_overlap: usize,
        /// How many failed visibility
        hidden_beacon: usize,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoAxisCandidates(axis) => {
                write!(f, "no {axis} shift reaches the overlap threshold")
            }
            RejectionReason::InsufficientOverlap { shared } => {
                write!(f, "only {shared} shared beacons")
            }
            RejectionReason::CoordinateOverflow => {
                f.write_str("translated beacons leave the coordinate range")
            }
            RejectionReason::HiddenBeacon { observer, beacon } => {
                write!(f, "{observer} scanner should have seen beacon {beacon}")
            }
            RejectionReason::Exhausted {
                tried,
                insufficient_overlap,
                hidden_beacon,
            } => write!(
                f,
                "{tried} candidates rejected ({insufficient_overlap} overlap, {hidden_beacon} visibility)"
            ),
        }
    }
}

/// A 3D translation proposed from per-axis signature correlation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslationCandidate {
    /// Proposed translation
    pub translation: Point3,
    /// Product of the three per-axis strengths
    pub score: u64,
}
