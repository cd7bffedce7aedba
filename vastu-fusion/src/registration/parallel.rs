//! Concurrent evaluation of one registration pass.
//!
//! Workers pull remaining cloud indices from a shared queue (handed out in
//! ascending order) and try all rotations of each against a snapshot of the
//! universe. Only the success with the lowest index is kept, which is the
//! same cloud a sequential walk would merge first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use log::trace;
use parking_lot::Mutex;

use crate::core::PointCloud;
use crate::error::{Error, Result};
use crate::matching::CloudMatcher;

use super::cache::RotationCache;
use super::driver::{Found, deadline_passed, try_cloud};

/// Evaluate `pending` on `workers` threads and return the lowest-index
/// cloud that aligns with `universe`.
pub(super) fn find_first<M: CloudMatcher>(
    matcher: &M,
    universe: &PointCloud,
    cache: &RotationCache<'_>,
    pending: &[usize],
    workers: usize,
    deadline: Option<Instant>,
) -> Result<Option<Found>> {
    if pending.is_empty() {
        return Ok(None);
    }

    let (tx, rx) = crossbeam_channel::unbounded::<usize>();
    for &index in pending {
        tx.send(index)
            .map_err(|e| Error::Worker(format!("work queue closed: {e}")))?;
    }
    drop(tx);

    let best: Mutex<Option<Found>> = Mutex::new(None);
    let found_any = AtomicBool::new(false);
    let workers = workers.clamp(1, pending.len());

    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let rx = rx.clone();
            let best = &best;
            let found_any = &found_any;
            let handle = thread::Builder::new()
                .name(format!("fusion-worker-{id}"))
                .spawn_scoped(scope, move || {
                    while let Ok(index) = rx.recv() {
                        if deadline_passed(deadline) {
                            break;
                        }
                        // Anything above a recorded success can never be committed
                        if found_any.load(Ordering::Acquire)
                            && best.lock().as_ref().is_some_and(|b| b.index < index)
                        {
                            trace!("worker {id}: skipping cloud {index}");
                            continue;
                        }
                        if let Some(hit) = try_cloud(matcher, universe, cache, index, deadline) {
                            let mut slot = best.lock();
                            if slot.as_ref().is_none_or(|b| hit.index < b.index) {
                                *slot = Some(hit);
                            }
                            found_any.store(true, Ordering::Release);
                        }
                    }
                })
                .map_err(|e| Error::Worker(format!("failed to spawn worker {id}: {e}")))?;
            handles.push(handle);
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| Error::Worker("worker thread panicked".into()))?;
        }
        Ok(())
    })?;

    Ok(best.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point3;
    use crate::matching::Aligner;

    fn line(n: i32, offset: Point3) -> Vec<Point3> {
        (0..n)
            .map(|i| Point3::new(37 * i - 300, 53 * i - 400, -29 * i + 250) + offset)
            .collect()
    }

    #[test]
    fn test_lowest_index_wins() {
        let universe = PointCloud::new("u", line(14, Point3::ORIGIN));
        let clouds = vec![
            universe.clone(),
            PointCloud::new("miss", (0..14).map(|i| Point3::new(41 * i, 17 * i, 23 * i))),
            PointCloud::new("a", line(14, Point3::new(5, 0, 0))),
            PointCloud::new("b", line(14, Point3::new(0, 9, 0))),
        ];
        let cache = RotationCache::new(&clouds);

        for workers in [1, 2, 4] {
            let found = find_first(&Aligner::default(), &universe, &cache, &[1, 2, 3], workers, None)
                .unwrap()
                .expect("a cloud should align");
            assert_eq!(found.index, 2);
            assert_eq!(found.alignment.translation, Point3::new(-5, 0, 0));
        }
    }

    #[test]
    fn test_nothing_aligns() {
        let universe = PointCloud::new("u", line(14, Point3::ORIGIN));
        let clouds = vec![
            universe.clone(),
            PointCloud::new("miss", (0..14).map(|i| Point3::new(41 * i, 17 * i, 23 * i))),
        ];
        let cache = RotationCache::new(&clouds);
        let found = find_first(&Aligner::default(), &universe, &cache, &[1], 3, None).unwrap();
        assert!(found.is_none());
        assert!(find_first(&Aligner::default(), &universe, &cache, &[], 3, None)
            .unwrap()
            .is_none());
    }
}
