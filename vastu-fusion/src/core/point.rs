//! Integer point type for beacon and scanner coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in [`Axis::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// Integer 3D point (beacon offset, scanner position or translation).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point3 {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl Point3 {
    /// Origin of a local frame
    pub const ORIGIN: Point3 = Point3 { x: 0, y: 0, z: 0 };

    /// Largest accepted magnitude of a reported coordinate.
    ///
    /// Keeps rotation (negation) and pairwise shifts of reported offsets
    /// inside `i32`.
    pub const COORD_LIMIT: i32 = 1 << 30;

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along one axis
    #[inline]
    pub fn component(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Build a point from per-axis components in X, Y, Z order
    #[inline]
    pub fn from_components(c: [i32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Components in X, Y, Z order
    #[inline]
    pub fn components(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(&self) -> Point3 {
        Point3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Whether every component lies within [`Point3::COORD_LIMIT`]
    #[inline]
    pub fn within_limit(&self) -> bool {
        self.components()
            .iter()
            .all(|c| (-Self::COORD_LIMIT..=Self::COORD_LIMIT).contains(c))
    }

    /// Component-wise sum, or `None` if any component overflows
    #[inline]
    pub fn checked_add(self, other: Point3) -> Option<Point3> {
        Some(Point3::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
            self.z.checked_add(other.z)?,
        ))
    }

    /// Component-wise difference, or `None` if any component overflows
    #[inline]
    pub fn checked_sub(self, other: Point3) -> Option<Point3> {
        Some(Point3::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
            self.z.checked_sub(other.z)?,
        ))
    }

    #[inline]
    fn abs_diff64(&self, other: &Point3) -> [i64; 3] {
        [
            (self.x as i64 - other.x as i64).abs(),
            (self.y as i64 - other.y as i64).abs(),
            (self.z as i64 - other.z as i64).abs(),
        ]
    }

    /// Manhattan distance to another point
    #[inline]
    pub fn manhattan_distance(&self, other: &Point3) -> i64 {
        self.abs_diff64(other).iter().sum()
    }

    /// Chebyshev distance (largest per-axis difference)
    #[inline]
    pub fn chebyshev_distance(&self, other: &Point3) -> i64 {
        let [dx, dy, dz] = self.abs_diff64(other);
        dx.max(dy).max(dz)
    }

    /// Squared Euclidean length as a vector from the origin
    #[inline]
    pub fn norm_squared(&self) -> i64 {
        let (x, y, z) = (self.x as i64, self.y as i64, self.z as i64);
        x * x + y * y + z * z
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Error parsing a `x,y,z` coordinate triple
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePointError {
    /// Not three comma-separated integers
    Malformed(String),
    /// A coordinate exceeds [`Point3::COORD_LIMIT`]
    OutOfRange(String),
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePointError::Malformed(s) => write!(f, "invalid point '{s}': expected x,y,z"),
            ParsePointError::OutOfRange(s) => write!(
                f,
                "point '{s}' has a coordinate beyond +/-{}",
                Point3::COORD_LIMIT
            ),
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point3 {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointError::Malformed(s.to_string());
        let mut parts = s.trim().split(',');
        let mut next = || -> Result<i32, ParsePointError> {
            parts
                .next()
                .ok_or_else(err)?
                .trim()
                .parse::<i32>()
                .map_err(|_| err())
        };
        let point = Point3::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(err());
        }
        if !point.within_limit() {
            return Err(ParsePointError::OutOfRange(s.trim().to_string()));
        }
        Ok(point)
    }
}
