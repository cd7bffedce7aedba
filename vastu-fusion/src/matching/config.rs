//! Aligner configuration.

use serde::{Deserialize, Serialize};

use crate::core::OffsetSearch;
use crate::error::{Error, Result};

/// How per-axis translation candidates are enumerated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Only shifts formed by a pair of occupied coordinates (exact, fast)
    #[default]
    KeyPairs,
    /// Every integer shift across the coordinate ranges plus a margin
    Sweep,
}

/// Configuration for the cloud aligner.
///
/// `min_overlap` and `detection_range` describe the sensing hardware: how
/// many beacons two scanners must share before their overlap is trusted, and
/// how far (per axis) a scanner sees.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlignerConfig {
    /// Minimum number of shared beacons for a valid alignment.
    #[serde(default = "default_min_overlap")]
    pub min_overlap: usize,

    /// Detection range of a scanner, per axis (box distance).
    /// A beacon within this range of a scanner must appear in its report.
    #[serde(default = "default_detection_range")]
    pub detection_range: i32,

    /// Per-axis shift enumeration strategy.
    #[serde(default)]
    pub search_mode: SearchMode,

    /// Extra shifts tested on each side of the range in sweep mode.
    /// Defaults to twice the detection range.
    #[serde(default)]
    pub search_margin: Option<i32>,
}

fn default_min_overlap() -> usize {
    12
}

fn default_detection_range() -> i32 {
    1000
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            min_overlap: default_min_overlap(),
            detection_range: default_detection_range(),
            search_mode: SearchMode::default(),
            search_margin: None,
        }
    }
}

impl AlignerConfig {
    /// Config with custom domain constants and default search settings.
    pub fn new(min_overlap: usize, detection_range: i32) -> Self {
        Self {
            min_overlap,
            detection_range,
            ..Default::default()
        }
    }

    /// Exhaustive range sweep, as a cross-check for the key-pair search.
    pub fn sweep() -> Self {
        Self {
            search_mode: SearchMode::Sweep,
            ..Default::default()
        }
    }

    /// Resolved offset search strategy.
    pub fn offset_search(&self) -> OffsetSearch {
        match self.search_mode {
            SearchMode::KeyPairs => OffsetSearch::KeyPairs,
            SearchMode::Sweep => OffsetSearch::Sweep {
                margin: self
                    .search_margin
                    .unwrap_or(self.detection_range.saturating_mul(2)),
            },
        }
    }

    /// Check that the constants are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_overlap == 0 {
            return Err(Error::InvalidConfig(
                "alignment.min_overlap must be at least 1".into(),
            ));
        }
        if self.detection_range < 0 {
            return Err(Error::InvalidConfig(format!(
                "alignment.detection_range must not be negative (got {})",
                self.detection_range
            )));
        }
        match self.search_margin {
            Some(margin) if margin < 0 => Err(Error::InvalidConfig(format!(
                "alignment.search_margin must not be negative (got {margin})"
            ))),
            _ => Ok(()),
        }
    }
}
