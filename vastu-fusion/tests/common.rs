//! Test utilities for VastuFusion.
//!
//! Provides the five-scanner sample report and a seeded scene generator.

#![allow(dead_code)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vastu_fusion::io::parse_report;
use vastu_fusion::{Point3, RotationGroup, ScannerReading};

/// Five overlapping scanners with known answers.
pub const SAMPLE: &str = include_str!("data/sample_report.txt");

/// Beacons in the fully registered sample
pub const SAMPLE_BEACONS: usize = 79;

/// Largest Manhattan distance between two sample scanners
pub const SAMPLE_MAX_DISTANCE: i64 = 3621;

/// Sample scanner positions relative to scanner 0
pub fn sample_positions() -> Vec<(&'static str, Point3)> {
    vec![
        ("0", Point3::ORIGIN),
        ("1", Point3::new(68, -1246, -43)),
        ("2", Point3::new(1105, -1205, 1229)),
        ("3", Point3::new(-92, -2380, -20)),
        ("4", Point3::new(-20, -1133, 1061)),
    ]
}

/// Parsed sample readings
pub fn sample_readings() -> Vec<ScannerReading> {
    parse_report(SAMPLE).expect("sample report parses")
}

/// Detection range used by generated scenes
pub const RANGE: i32 = 1000;

/// Spacing between neighbouring scanners along X
pub const SPACING: i32 = 1100;

/// A synthetic world with scanners on a line.
pub struct Scene {
    /// World positions of the scanners
    pub positions: Vec<Point3>,
    /// Rotation index of each scanner
    pub rotations: Vec<usize>,
    /// Every beacon in the world frame
    pub beacons: HashSet<Point3>,
    /// What each scanner reports, in its own frame
    pub readings: Vec<ScannerReading>,
}

impl Scene {
    /// Generate `scanners` scanners, each overlapping only its neighbours.
    ///
    /// Neighbours share at least `shared` beacons. Readings contain exactly
    /// the beacons inside each scanner's range, so every pair is consistent.
    pub fn generate(seed: u64, scanners: usize, shared: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let group = RotationGroup::get();

        let positions: Vec<Point3> = (0..scanners)
            .map(|k| {
                Point3::new(
                    SPACING * k as i32 + rng.random_range(-50..=50),
                    rng.random_range(-50..=50),
                    rng.random_range(-50..=50),
                )
            })
            .collect();

        let mut beacons = HashSet::new();
        for pair in positions.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let x_lo = b.x - RANGE + 60;
            let x_hi = a.x + RANGE - 60;
            while beacons
                .iter()
                .filter(|p: &&Point3| {
                    p.chebyshev_distance(&a) <= RANGE as i64 && p.chebyshev_distance(&b) <= RANGE as i64
                })
                .count()
                < shared
            {
                beacons.insert(Point3::new(
                    rng.random_range(x_lo..=x_hi),
                    rng.random_range(-850..=850),
                    rng.random_range(-850..=850),
                ));
            }
        }
        for &p in &positions {
            for _ in 0..10 {
                beacons.insert(Point3::new(
                    p.x + rng.random_range(-900..=900),
                    p.y + rng.random_range(-900..=900),
                    p.z + rng.random_range(-900..=900),
                ));
            }
        }

        let rotations: Vec<usize> = (0..scanners)
            .map(|_| rng.random_range(0..group.len()))
            .collect();

        let readings = positions
            .iter()
            .zip(&rotations)
            .enumerate()
            .map(|(k, (&position, &rotation))| {
                let to_local = group.rotation(group.inverse_index(rotation));
                let mut seen: Vec<Point3> = beacons
                    .iter()
                    .filter(|p| p.chebyshev_distance(&position) <= RANGE as i64)
                    .map(|&p| to_local.apply(p - position))
                    .collect();
                seen.sort_unstable();
                ScannerReading::new(format!("s{k}"), seen)
            })
            .collect();

        Self {
            positions,
            rotations,
            beacons,
            readings,
        }
    }

    /// Position of scanner `k` in scanner 0's frame
    pub fn expected_position(&self, k: usize) -> Point3 {
        let group = RotationGroup::get();
        let to_first = group.rotation(group.inverse_index(self.rotations[0]));
        to_first.apply(self.positions[k] - self.positions[0])
    }

    /// Largest Manhattan distance between two scanners
    pub fn expected_max_distance(&self) -> i64 {
        let mut best = 0;
        for (i, a) in self.positions.iter().enumerate() {
            for b in &self.positions[i + 1..] {
                best = best.max(a.manhattan_distance(b));
            }
        }
        best
    }

    /// World beacons expressed in scanner 0's frame, sorted
    pub fn expected_beacons(&self) -> Vec<Point3> {
        let group = RotationGroup::get();
        let to_first = group.rotation(group.inverse_index(self.rotations[0]));
        let mut out: Vec<Point3> = self
            .beacons
            .iter()
            .map(|&p| to_first.apply(p - self.positions[0]))
            .collect();
        out.sort_unstable();
        out
    }
}

/// Prefix every scanner name, so two scenes can be mixed without clashes.
pub fn renamed(readings: Vec<ScannerReading>, prefix: &str) -> Vec<ScannerReading> {
    readings
        .into_iter()
        .map(|r| ScannerReading::new(format!("{prefix}{}", r.name), r.beacons))
        .collect()
}
