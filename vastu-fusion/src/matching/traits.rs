//! Traits for cloud alignment algorithms.

use crate::core::PointCloud;

use super::Alignment;

/// Trait for pairwise cloud alignment.
///
/// The registration driver only needs a yes/no answer with a fused cloud for
/// one fixed rotation of the candidate; it handles rotations itself.
///
/// # Example
///
/// ```ignore
/// use vastu_fusion::matching::{Aligner, CloudMatcher};
///
/// fn fuse<M: CloudMatcher>(matcher: &M, a: &PointCloud, b: &PointCloud) -> Option<PointCloud> {
///     matcher.try_align(a, b).map(|alignment| alignment.merged)
/// }
/// ```
pub trait CloudMatcher: Send + Sync {
    /// Try to align `candidate` (already rotated) onto `fixed`.
    fn try_align(&self, fixed: &PointCloud, candidate: &PointCloud) -> Option<Alignment>;

    /// Get the name of this matcher for logging/debugging
    fn name(&self) -> &str;

    /// Minimum number of shared beacons this matcher requires
    fn min_overlap(&self) -> usize;
}
