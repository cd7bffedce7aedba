//! Per-axis projection histograms.
//!
//! An [`AxisSignature`] counts how many beacons of a cloud share each
//! coordinate value on one axis. Two clouds that overlap under some
//! translation `t` have signatures that agree on at least the shared beacons
//! once shifted by the matching component of `t`, so correlating signatures
//! yields a short list of per-axis translation candidates.
//!
//! The fingerprint is lossy. A strong correlation on every axis is only a
//! candidate; the aligner verifies it in 3D.

use std::collections::{BTreeMap, HashMap};

use super::point::{Axis, Point3};

/// How candidate shifts are enumerated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffsetSearch {
    /// Accumulate overlap only at shifts formed by a pair of occupied keys.
    #[default]
    KeyPairs,
    /// Test every integer shift between the key ranges, widened by a margin.
    Sweep {
        /// Extra shifts tested on both ends of the range
        margin: i32,
    },
}

/// A per-axis translation candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisCandidate {
    /// Value added to candidate coordinates to reach the fixed frame
    pub shift: i32,
    /// Number of points that coincide on this axis at `shift`
    pub strength: usize,
}

/// Histogram of one axis of a cloud's offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisSignature {
    axis: Option<Axis>,
    counts: BTreeMap<i32, usize>,
    total: usize,
}

impl AxisSignature {
    /// Project points onto `axis` and count each coordinate value.
    pub fn project<'a, I>(points: I, axis: Axis) -> Self
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for p in points {
            *counts.entry(p.component(axis)).or_insert(0) += 1;
            total += 1;
        }
        Self {
            axis: Some(axis),
            counts,
            total,
        }
    }

    /// Axis this signature was projected on
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Number of points with this coordinate value
    #[inline]
    pub fn count(&self, value: i32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct coordinate values
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no points were projected
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of projected points
    pub fn total(&self) -> usize {
        self.total
    }

    /// Smallest coordinate value
    pub fn min_key(&self) -> Option<i32> {
        self.counts.keys().next().copied()
    }

    /// Largest coordinate value
    pub fn max_key(&self) -> Option<i32> {
        self.counts.keys().next_back().copied()
    }

    /// Iterate (value, count) in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }

    /// Points coinciding on this axis when `candidate` is shifted by `shift`.
    ///
    /// Sums `min(fixed[k + shift], candidate[k])` over candidate keys `k`.
    pub fn overlap_at(fixed: &AxisSignature, candidate: &AxisSignature, shift: i32) -> usize {
        candidate
            .iter()
            .map(|(k, c)| k.checked_add(shift).map_or(0, |key| fixed.count(key).min(c)))
            .sum()
    }

    /// All shifts whose overlap reaches `min_overlap`, in ascending shift order.
    ///
    /// Shifts that do not fit in `i32` are never proposed.
    pub fn candidate_shifts(
        fixed: &AxisSignature,
        candidate: &AxisSignature,
        min_overlap: usize,
        search: OffsetSearch,
    ) -> Vec<AxisCandidate> {
        let (Some(f_min), Some(f_max), Some(c_min), Some(c_max)) = (
            fixed.min_key(),
            fixed.max_key(),
            candidate.min_key(),
            candidate.max_key(),
        ) else {
            return Vec::new();
        };

        match search {
            OffsetSearch::Sweep { margin } => {
                let margin = i64::from(margin.max(0));
                let lo = clamp_shift(i64::from(f_min) - i64::from(c_max) - margin);
                let hi = clamp_shift(i64::from(f_max) - i64::from(c_min) + margin);
                (lo..=hi)
                    .filter_map(|shift| {
                        let strength = Self::overlap_at(fixed, candidate, shift);
                        (strength >= min_overlap && strength > 0)
                            .then_some(AxisCandidate { shift, strength })
                    })
                    .collect()
            }
            OffsetSearch::KeyPairs => {
                let mut acc: HashMap<i32, usize> = HashMap::new();
                for (ck, cc) in candidate.iter() {
                    for (fk, fc) in fixed.iter() {
                        if let Some(shift) = fk.checked_sub(ck) {
                            *acc.entry(shift).or_insert(0) += fc.min(cc);
                        }
                    }
                }
                let mut out: Vec<AxisCandidate> = acc
                    .into_iter()
                    .filter(|&(_, strength)| strength >= min_overlap && strength > 0)
                    .map(|(shift, strength)| AxisCandidate { shift, strength })
                    .collect();
                out.sort_unstable_by_key(|c| c.shift);
                out
            }
        }
    }
}

fn clamp_shift(shift: i64) -> i32 {
    shift.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
