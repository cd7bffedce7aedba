//! Pass-based registration driver.

use std::collections::BTreeSet;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::FusionConfig;
use crate::core::{PointCloud, ROTATION_COUNT, ScannerReading};
use crate::error::{Error, Result};
use crate::matching::{Aligner, Alignment, CloudMatcher};

use super::cache::RotationCache;
use super::config::RegistrationConfig;
use super::parallel;
use super::types::{MergeRecord, Registration};

/// A successful alignment of one remaining cloud.
#[derive(Debug)]
pub(super) struct Found {
    pub index: usize,
    pub rotation: usize,
    pub alignment: Alignment,
}

/// Try all rotations of cloud `index` against `universe`.
///
/// Gives up between rotations once `deadline` has passed.
pub(super) fn try_cloud<M: CloudMatcher>(
    matcher: &M,
    universe: &PointCloud,
    cache: &RotationCache<'_>,
    index: usize,
    deadline: Option<Instant>,
) -> Option<Found> {
    for rotation in 0..ROTATION_COUNT {
        if deadline_passed(deadline) {
            debug!(
                "Time budget ran out at rotation {} of {}",
                rotation,
                cache.original(index)
            );
            return None;
        }
        if let Some(alignment) = matcher.try_align(universe, cache.get(index, rotation)) {
            return Some(Found {
                index,
                rotation,
                alignment,
            });
        }
    }
    debug!(
        "[{}] {} has no verified overlap with {} beacons yet",
        matcher.name(),
        cache.original(index),
        universe.len()
    );
    None
}

pub(super) fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

/// Merges every reading into the frame of the first one.
///
/// Works over an arena of clouds with a set of remaining indices. A pass
/// walks the remaining clouds in index order and tries each against the
/// current universe under all 24 rotations. The run ends when nothing
/// remains, or fails when a pass merges nothing.
///
/// With `workers > 1` a pass evaluates remaining clouds concurrently and
/// commits only the lowest-index success, so every merge is computed against
/// the latest universe.
pub struct Registrar<M: CloudMatcher = Aligner> {
    matcher: M,
    config: RegistrationConfig,
}

impl Default for Registrar<Aligner> {
    fn default() -> Self {
        Self::new(Aligner::default(), RegistrationConfig::default())
    }
}

impl Registrar<Aligner> {
    /// Build a registrar with the signature aligner from a validated config.
    pub fn from_config(config: &FusionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Aligner::new(config.alignment.clone()),
            config.registration.clone(),
        ))
    }
}

impl<M: CloudMatcher> Registrar<M> {
    /// Create a registrar around any matcher
    pub fn new(matcher: M, config: RegistrationConfig) -> Self {
        Self { matcher, config }
    }

    /// Get the matcher
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Get the configuration
    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Register all readings into one universe.
    pub fn register<I>(&self, readings: I) -> Result<Registration>
    where
        I: IntoIterator<Item = ScannerReading>,
    {
        self.config.validate()?;

        let readings: Vec<ScannerReading> = readings.into_iter().collect();
        if readings.is_empty() {
            return Err(Error::EmptyInput);
        }
        for reading in &readings {
            if let Some(&beacon) = reading.beacons.iter().find(|p| !p.within_limit()) {
                return Err(Error::CoordinateOutOfRange {
                    scanner: reading.name.clone(),
                    beacon,
                });
            }
        }
        for name in duplicate_names(&readings) {
            warn!(
                "Scanner name {} is used by more than one reading; lookups by name return the first",
                name
            );
        }
        let clouds: Vec<PointCloud> = readings.into_iter().map(PointCloud::from).collect();

        let min_overlap = self.matcher.min_overlap();
        let undersized: Vec<String> = clouds
            .iter()
            .filter(|c| c.len() < min_overlap)
            .map(|c| c.id().to_string())
            .collect();
        for name in &undersized {
            warn!(
                "Scanner {} reports fewer than {} beacons and cannot overlap anything",
                name, min_overlap
            );
        }

        let start = Instant::now();
        let deadline = self.config.time_budget().map(|budget| start + budget);
        let cache = RotationCache::new(&clouds);

        let mut universe = clouds[0].clone();
        let mut remaining: BTreeSet<usize> = (1..clouds.len()).collect();
        let mut merges = Vec::with_capacity(remaining.len());
        let mut passes = 0;

        info!(
            "[{}] Registering {} scanners ({} workers)",
            self.matcher.name(),
            clouds.len(),
            self.config.workers
        );

        while !remaining.is_empty() {
            passes += 1;
            let before = merges.len();

            let pending: Vec<usize> = remaining.iter().copied().collect();
            if self.config.is_parallel() {
                let found = parallel::find_first(
                    &self.matcher,
                    &universe,
                    &cache,
                    &pending,
                    self.config.workers,
                    deadline,
                )?;
                if let Some(found) = found {
                    remaining.remove(&found.index);
                    universe = self.commit(&cache, found, passes, &mut merges);
                }
            } else {
                for index in pending {
                    if deadline_passed(deadline) {
                        break;
                    }
                    if let Some(found) =
                        try_cloud(&self.matcher, &universe, &cache, index, deadline)
                    {
                        remaining.remove(&index);
                        universe = self.commit(&cache, found, passes, &mut merges);
                    }
                }
            }

            info!(
                "Pass {}: {} merged, {} remaining, {} beacons",
                passes,
                merges.len() - before,
                remaining.len(),
                universe.len()
            );

            if remaining.is_empty() {
                break;
            }
            if deadline_passed(deadline) {
                return Err(Error::TimeBudgetExceeded {
                    elapsed: start.elapsed(),
                    merged: merged_names(&clouds, &remaining),
                    unmerged: unmerged_names(&clouds, &remaining),
                });
            }
            if merges.len() == before {
                return Err(Error::Unregistrable {
                    merged: merged_names(&clouds, &remaining),
                    unmerged: unmerged_names(&clouds, &remaining),
                });
            }
        }

        info!(
            "Registered {} scanners: {} beacons in {} passes ({:.1?}, {} rotated variants)",
            clouds.len(),
            universe.len(),
            passes,
            start.elapsed(),
            cache.built()
        );

        Ok(Registration {
            universe,
            merges,
            passes,
            undersized,
        })
    }

    fn commit(
        &self,
        cache: &RotationCache<'_>,
        found: Found,
        pass: usize,
        merges: &mut Vec<MergeRecord>,
    ) -> PointCloud {
        let scanner = cache.original(found.index).id().to_string();
        let alignment = found.alignment;
        info!(
            "Merged scanner {} at {} (rotation {}, {} shared, {} tried) -> {} beacons",
            scanner,
            alignment.translation,
            found.rotation,
            alignment.shared,
            alignment.candidates_tried,
            alignment.merged.len()
        );
        merges.push(MergeRecord {
            scanner,
            rotation: found.rotation,
            translation: alignment.translation,
            shared: alignment.shared,
            pass,
        });
        alignment.merged
    }
}

/// Names carried by more than one reading, in first-seen order.
fn duplicate_names(readings: &[ScannerReading]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for reading in readings {
        let name = reading.name.as_str();
        if !seen.insert(name) && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }
    duplicates
}

fn merged_names(clouds: &[PointCloud], remaining: &BTreeSet<usize>) -> Vec<String> {
    (0..clouds.len())
        .filter(|i| !remaining.contains(i))
        .map(|i| clouds[i].id().to_string())
        .collect()
}

fn unmerged_names(clouds: &[PointCloud], remaining: &BTreeSet<usize>) -> Vec<String> {
    remaining.iter().map(|&i| clouds[i].id().to_string()).collect()
}

/// Register `readings` with default settings.
pub fn register(readings: Vec<ScannerReading>) -> Result<Registration> {
    Registrar::default().register(readings)
}
