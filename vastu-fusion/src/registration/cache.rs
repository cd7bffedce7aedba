//! Memoized rotated variants of the input clouds.

use std::sync::OnceLock;

use crate::core::{PointCloud, ROTATION_COUNT};

/// Lazily built `(cloud, rotation)` variants.
///
/// Each slot is filled at most once, so workers can share the cache by
/// reference. A variant keeps its own signature cache, which is why it is
/// worth keeping across passes.
pub struct RotationCache<'a> {
    clouds: &'a [PointCloud],
    slots: Vec<OnceLock<PointCloud>>,
}

impl<'a> RotationCache<'a> {
    /// Empty cache over `clouds`
    pub fn new(clouds: &'a [PointCloud]) -> Self {
        let slots = (0..clouds.len() * ROTATION_COUNT)
            .map(|_| OnceLock::new())
            .collect();
        Self { clouds, slots }
    }

    /// Cloud `index` in its original orientation
    pub fn original(&self, index: usize) -> &'a PointCloud {
        &self.clouds[index]
    }

    /// Cloud `index` under rotation `rotation`.
    pub fn get(&self, index: usize, rotation: usize) -> &PointCloud {
        self.slots[index * ROTATION_COUNT + rotation]
            .get_or_init(|| self.clouds[index].rotated(rotation))
    }

    /// Number of variants built so far
    pub fn built(&self) -> usize {
        self.slots.iter().filter(|s| s.get().is_some()).count()
    }
}
