//! Signature-driven alignment with overlap and visibility verification.

use crate::core::{Axis, AxisCandidate, AxisSignature, Point3, PointCloud};

use super::config::AlignerConfig;
use super::traits::CloudMatcher;
use super::types::{Alignment, RejectionReason, Side, TranslationCandidate};

/// Aligns a candidate cloud onto a fixed cloud for one candidate orientation.
///
/// 1. Correlate per-axis signatures to get shifts with at least
///    `min_overlap` coinciding coordinates on that axis.
/// 2. Combine the three lists into 3D translations, strongest first.
/// 3. Accept the first translation under which at least `min_overlap`
///    beacons coincide and neither side's scanners miss a beacon the other
///    side reports inside their detection range.
#[derive(Clone, Debug, Default)]
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    /// Create a new aligner
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Per-axis shifts that reach the overlap threshold.
    pub fn axis_candidates(
        &self,
        fixed: &PointCloud,
        candidate: &PointCloud,
        axis: Axis,
    ) -> Vec<AxisCandidate> {
        AxisSignature::candidate_shifts(
            fixed.signature(axis),
            candidate.signature(axis),
            self.config.min_overlap,
            self.config.offset_search(),
        )
    }

    /// 3D translation candidates ordered by descending strength product.
    pub fn translation_candidates(
        &self,
        fixed: &PointCloud,
        candidate: &PointCloud,
    ) -> Result<Vec<TranslationCandidate>, RejectionReason> {
        let mut per_axis: [Vec<AxisCandidate>; 3] = Default::default();
        for axis in Axis::ALL {
            let found = self.axis_candidates(fixed, candidate, axis);
            if found.is_empty() {
                return Err(RejectionReason::NoAxisCandidates(axis));
            }
            per_axis[axis.index()] = found;
        }

        let [xs, ys, zs] = &per_axis;
        let mut out = Vec::with_capacity(xs.len() * ys.len() * zs.len());
        for x in xs {
            for y in ys {
                for z in zs {
                    out.push(TranslationCandidate {
                        translation: Point3::new(x.shift, y.shift, z.shift),
                        score: x.strength as u64 * y.strength as u64 * z.strength as u64,
                    });
                }
            }
        }
        // Stable: equal scores keep x-major enumeration order
        out.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(out)
    }

    /// Verify one translation. Returns the number of shared beacons.
    pub fn verify(
        &self,
        fixed: &PointCloud,
        candidate: &PointCloud,
        translation: Point3,
    ) -> Result<usize, RejectionReason> {
        let moved: Vec<Point3> = candidate
            .offsets()
            .iter()
            .map(|&p| p.checked_add(translation))
            .collect::<Option<_>>()
            .ok_or(RejectionReason::CoordinateOverflow)?;
        let shared = moved.iter().filter(|p| fixed.contains(p)).count();

        // Union would be |fixed| + |candidate| - shared
        if shared < self.config.min_overlap {
            return Err(RejectionReason::InsufficientOverlap { shared });
        }

        let range = self.config.detection_range;

        if let Some(beacon) = fixed.first_hidden_beacon(moved, range) {
            return Err(RejectionReason::HiddenBeacon {
                observer: Side::Fixed,
                beacon,
            });
        }

        // Offsets that leave the i32 frame are out of any candidate probe's range
        let moved_out = fixed
            .offsets()
            .iter()
            .filter_map(|&p| p.checked_sub(translation));
        if let Some(beacon) = candidate.first_hidden_beacon(moved_out, range) {
            return Err(RejectionReason::HiddenBeacon {
                observer: Side::Candidate,
                beacon,
            });
        }

        Ok(shared)
    }

    /// Full alignment attempt with the rejection reason on failure.
    pub fn align(
        &self,
        fixed: &PointCloud,
        candidate: &PointCloud,
    ) -> Result<Alignment, RejectionReason> {
        let candidates = self.translation_candidates(fixed, candidate)?;

        let mut insufficient_overlap = 0;
        let mut hidden_beacon = 0;

        for (i, c) in candidates.iter().enumerate() {
            match self.verify(fixed, candidate, c.translation) {
                Ok(shared) => {
                    return Ok(Alignment {
                        translation: c.translation,
                        shared,
                        candidates_tried: i + 1,
                        merged: fixed.merged(candidate, c.translation),
                    });
                }
                Err(reason) => {
                    log::trace!(
                        "{} <- {} at {}: {}",
                        fixed.id(),
                        candidate.id(),
                        c.translation,
                        reason
                    );
                    match reason {
                        RejectionReason::InsufficientOverlap { .. } => insufficient_overlap += 1,
                        RejectionReason::HiddenBeacon { .. } => hidden_beacon += 1,
                        _ => {}
                    }
                }
            }
        }

        Err(RejectionReason::Exhausted {
            tried: candidates.len(),
            insufficient_overlap,
            hidden_beacon,
        })
    }

    /// Align `candidate` onto `fixed`, or `None` if no translation verifies.
    pub fn try_align(&self, fixed: &PointCloud, candidate: &PointCloud) -> Option<Alignment> {
        self.align(fixed, candidate).ok()
    }

    /// Why the strongest translation candidate fails, or `None` if it verifies.
    pub fn diagnose(&self, fixed: &PointCloud, candidate: &PointCloud) -> Option<RejectionReason> {
        let candidates = match self.translation_candidates(fixed, candidate) {
            Ok(candidates) => candidates,
            Err(reason) => return Some(reason),
        };
        let best = candidates.first()?;
        self.verify(fixed, candidate, best.translation).err()
    }
}

impl CloudMatcher for Aligner {
    fn try_align(&self, fixed: &PointCloud, candidate: &PointCloud) -> Option<Alignment> {
        Aligner::try_align(self, fixed, candidate)
    }

    fn name(&self) -> &str {
        "signature"
    }

    fn min_overlap(&self) -> usize {
        self.config.min_overlap
    }
}
