//! Registration output types.

use serde::{Deserialize, Serialize};

use crate::core::{Point3, PointCloud};

/// One committed merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRecord {
    /// Name of the scanner folded into the universe
    pub scanner: String,
    /// Index into the rotation group of the orientation that matched
    pub rotation: usize,
    /// Scanner position in the universe frame
    pub translation: Point3,
    /// Beacons shared with the universe at merge time
    pub shared: usize,
    /// 1-based pass in which the merge happened
    pub pass: usize,
}

/// Result of registering a full set of readings.
#[derive(Clone, Debug)]
pub struct Registration {
    /// Every beacon and scanner in the frame of the first reading
    pub universe: PointCloud,
    /// Merges in commit order
    pub merges: Vec<MergeRecord>,
    /// Passes over the remaining readings
    pub passes: usize,
    /// Readings with fewer beacons than the overlap threshold
    pub undersized: Vec<String>,
}

impl Registration {
    /// Number of unique beacons
    pub fn beacon_count(&self) -> usize {
        self.universe.len()
    }

    /// Largest Manhattan distance between any two scanners.
    pub fn max_probe_distance(&self) -> i64 {
        self.universe.max_probe_distance()
    }

    /// Scanner names and positions in the universe frame, in merge order.
    pub fn scanner_positions(&self) -> Vec<(String, Point3)> {
        self.universe
            .probes()
            .iter()
            .map(|p| (p.scanner.clone(), p.position))
            .collect()
    }

    /// Position of a scanner by name (the first merged one if names repeat)
    pub fn scanner_position(&self, name: &str) -> Option<Point3> {
        self.universe
            .probes()
            .iter()
            .find(|p| p.scanner == name)
            .map(|p| p.position)
    }

    /// Beacons sorted for stable output
    pub fn sorted_beacons(&self) -> Vec<Point3> {
        let mut beacons: Vec<Point3> = self.universe.offsets().iter().copied().collect();
        beacons.sort_unstable();
        beacons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let universe = PointCloud::new("0", [Point3::new(3, 0, 0), Point3::new(1, 0, 0)])
            .merged(&PointCloud::new("1", []), Point3::new(10, -5, 2));
        let registration = Registration {
            universe,
            merges: Vec::new(),
            passes: 1,
            undersized: vec!["1".into()],
        };

        assert_eq!(registration.beacon_count(), 2);
        assert_eq!(registration.max_probe_distance(), 17);
        assert_eq!(
            registration.scanner_positions(),
            vec![
                ("0".to_string(), Point3::ORIGIN),
                ("1".to_string(), Point3::new(10, -5, 2))
            ]
        );
        assert_eq!(registration.scanner_position("1"), Some(Point3::new(10, -5, 2)));
        assert_eq!(registration.scanner_position("9"), None);
        assert_eq!(
            registration.sorted_beacons(),
            vec![Point3::new(1, 0, 0), Point3::new(3, 0, 0)]
        );
    }
}
