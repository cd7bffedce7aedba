//! Beacon clouds: one scanner's view, or a fusion of several.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::point::{Axis, Point3};
use super::rotation::{Rotation, RotationGroup};
use super::signature::AxisSignature;

/// Raw input from one scanner: its name and the beacons it reported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerReading {
    /// Scanner name from the report header
    pub name: String,
    /// Beacon positions relative to the scanner, in its own orientation
    pub beacons: Vec<Point3>,
}

impl ScannerReading {
    /// Create a new reading
    pub fn new(name: impl Into<String>, beacons: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            beacons,
        }
    }
}

/// Position of a scanner inside a cloud's frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Probe {
    /// Scanner name
    pub scanner: String,
    /// Scanner position in the owning cloud's frame
    pub position: Point3,
}

/// An immutable set of beacon offsets plus the scanners that observed them.
///
/// A cloud built from a reading has one probe at the origin. Merging two
/// clouds never mutates either; it builds a new cloud in the first cloud's
/// frame.
#[derive(Clone, Debug)]
pub struct PointCloud {
    id: String,
    offsets: HashSet<Point3>,
    probes: Vec<Probe>,
    signatures: [OnceLock<AxisSignature>; 3],
}

impl PointCloud {
    /// Create a single-scanner cloud with its probe at the origin.
    pub fn new(name: impl Into<String>, beacons: impl IntoIterator<Item = Point3>) -> Self {
        let name = name.into();
        let probe = Probe {
            scanner: name.clone(),
            position: Point3::ORIGIN,
        };
        Self::from_parts(name, beacons.into_iter().collect(), vec![probe])
    }

    fn from_parts(id: String, offsets: HashSet<Point3>, probes: Vec<Probe>) -> Self {
        debug_assert!(!probes.is_empty());
        Self {
            id,
            offsets,
            probes,
            signatures: Default::default(),
        }
    }

    /// Provenance label (scanner names joined by `|`)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Unique beacon offsets in this cloud's frame
    pub fn offsets(&self) -> &HashSet<Point3> {
        &self.offsets
    }

    /// Number of unique beacons
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the cloud has no beacons
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether a beacon offset is present
    pub fn contains(&self, p: &Point3) -> bool {
        self.offsets.contains(p)
    }

    /// Scanners folded into this cloud, in merge order
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Scanner positions in merge order
    pub fn probe_positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.probes.iter().map(|p| p.position)
    }

    /// Cached projection histogram for one axis.
    pub fn signature(&self, axis: Axis) -> &AxisSignature {
        self.signatures[axis.index()].get_or_init(|| AxisSignature::project(&self.offsets, axis))
    }

    /// Copy of this cloud with every offset rotated. Probes are kept as they are.
    pub fn rotate(&self, rotation: &Rotation) -> PointCloud {
        let offsets = self.offsets.iter().map(|&p| rotation.apply(p)).collect();
        Self::from_parts(self.id.clone(), offsets, self.probes.clone())
    }

    /// Copy of this cloud rotated by group rotation `index`.
    pub fn rotated(&self, index: usize) -> PointCloud {
        self.rotate(RotationGroup::get().rotation(index))
    }

    /// Copy of this cloud with offsets and probes moved by `delta`.
    pub fn translated(&self, delta: Point3) -> PointCloud {
        let offsets = self.offsets.iter().map(|&p| p + delta).collect();
        let probes = self
            .probes
            .iter()
            .map(|p| Probe {
                scanner: p.scanner.clone(),
                position: p.position + delta,
            })
            .collect();
        Self::from_parts(self.id.clone(), offsets, probes)
    }

    /// Whether any probe of this cloud would detect a beacon at `p`.
    ///
    /// Detection is a box test: every axis within `range` of the probe.
    #[inline]
    pub fn in_range_of_probe(&self, p: &Point3, range: i32) -> bool {
        self.probes
            .iter()
            .any(|probe| probe.position.chebyshev_distance(p) <= i64::from(range))
    }

    /// First point that a probe of this cloud should have detected but that
    /// is missing from its offsets.
    pub fn first_hidden_beacon<I>(&self, points: I, range: i32) -> Option<Point3>
    where
        I: IntoIterator<Item = Point3>,
    {
        points
            .into_iter()
            .find(|p| !self.offsets.contains(p) && self.in_range_of_probe(p, range))
    }

    /// Fuse `other` into this cloud's frame.
    ///
    /// `translation` moves `other`'s points into this frame (it is the
    /// position of `other`'s origin here). Offsets are unioned, probes are
    /// concatenated with `other`'s probes translated.
    pub fn merged(&self, other: &PointCloud, translation: Point3) -> PointCloud {
        let mut offsets = self.offsets.clone();
        offsets.extend(other.offsets.iter().map(|&p| p + translation));

        let mut probes = self.probes.clone();
        probes.extend(other.probes.iter().map(|p| Probe {
            scanner: p.scanner.clone(),
            position: p.position + translation,
        }));

        Self::from_parts(format!("{}|{}", self.id, other.id), offsets, probes)
    }

    /// Largest Manhattan distance between any two probes (0 with one probe).
    pub fn max_probe_distance(&self) -> i64 {
        let mut best = 0;
        for (i, a) in self.probes.iter().enumerate() {
            for b in &self.probes[i + 1..] {
                best = best.max(a.position.manhattan_distance(&b.position));
            }
        }
        best
    }
}

impl From<ScannerReading> for PointCloud {
    fn from(reading: ScannerReading) -> Self {
        PointCloud::new(reading.name, reading.beacons)
    }
}

impl fmt::Display for PointCloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scanner {} ({} beacons)", self.id, self.offsets.len())
    }
}
