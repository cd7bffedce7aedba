//! Axis-aligned rotations (the 24-element cube symmetry group).
//!
//! Scanners report beacons in an arbitrarily oriented local frame, but every
//! frame is axis aligned: each axis of one frame points along some signed
//! axis of another. Only the orientation-preserving maps are physically
//! possible, which leaves exactly 24 rotations.
//!
//! The group is generated once per process by composing quarter turns about
//! X, Y and Z (4 x 4 x 4 = 64 products) and keeping the first product for each
//! distinct image of the asymmetric probe point `(1, 2, 3)`. The resulting
//! order is fixed, so a rotation index is a stable handle for the lifetime of
//! the process.

use std::sync::OnceLock;

use super::point::Point3;

/// Number of distinct axis-aligned rotations.
pub const ROTATION_COUNT: usize = 24;

/// Point with pairwise distinct coordinate magnitudes, used to tell rotations apart.
const PROBE_POINT: Point3 = Point3::new(1, 2, 3);

/// Exact (cos, sin) of a number of quarter turns.
#[inline]
fn quarter_turn(turns: u8) -> (i32, i32) {
    match turns % 4 {
        0 => (1, 0),
        1 => (0, 1),
        2 => (-1, 0),
        _ => (0, -1),
    }
}

/// A 3x3 integer rotation matrix with entries in {-1, 0, 1}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// Row-major matrix, applied to column vectors
    m: [[i32; 3]; 3],
}

impl Rotation {
    /// The identity rotation
    pub const IDENTITY: Rotation = Rotation {
        m: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// Rotation about the X axis by a number of quarter turns.
    pub fn about_x(turns: u8) -> Self {
        let (c, s) = quarter_turn(turns);
        Self {
            m: [[1, 0, 0], [0, c, -s], [0, s, c]],
        }
    }

    /// Rotation about the Y axis by a number of quarter turns.
    pub fn about_y(turns: u8) -> Self {
        let (c, s) = quarter_turn(turns);
        Self {
            m: [[c, 0, s], [0, 1, 0], [-s, 0, c]],
        }
    }

    /// Rotation about the Z axis by a number of quarter turns.
    pub fn about_z(turns: u8) -> Self {
        let (c, s) = quarter_turn(turns);
        Self {
            m: [[c, -s, 0], [s, c, 0], [0, 0, 1]],
        }
    }

    /// Matrix rows
    pub fn matrix(&self) -> [[i32; 3]; 3] {
        self.m
    }

    /// Apply this rotation to a point.
    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        let v = p.components();
        let row = |r: &[i32; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
        Point3::new(row(&self.m[0]), row(&self.m[1]), row(&self.m[2]))
    }

    /// Matrix product `self * other`: applies `other` first, then `self`.
    pub fn compose(&self, other: &Rotation) -> Rotation {
        let mut m = [[0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Rotation { m }
    }

    /// Inverse rotation (the transpose, since the matrix is orthogonal).
    pub fn inverse(&self) -> Rotation {
        let mut m = [[0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[j][i];
            }
        }
        Rotation { m }
    }

    /// Matrix determinant (1 for every proper rotation)
    pub fn determinant(&self) -> i32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Whether this is the identity
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The 24 distinct axis-aligned rotations in a fixed order.
#[derive(Debug)]
pub struct RotationGroup {
    rotations: Vec<Rotation>,
    inverses: Vec<usize>,
}

static GROUP: OnceLock<RotationGroup> = OnceLock::new();

impl RotationGroup {
    /// Process-wide group, built on first use.
    pub fn get() -> &'static RotationGroup {
        GROUP.get_or_init(RotationGroup::generate)
    }

    fn generate() -> Self {
        let mut rotations: Vec<Rotation> = Vec::with_capacity(ROTATION_COUNT);
        let mut seen: Vec<Point3> = Vec::with_capacity(ROTATION_COUNT);

        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let composite = Rotation::about_x(x)
                        .compose(&Rotation::about_y(y))
                        .compose(&Rotation::about_z(z));
                    let signature = composite.apply(PROBE_POINT);
                    if !seen.contains(&signature) {
                        seen.push(signature);
                        rotations.push(composite);
                    }
                }
            }
        }
        debug_assert_eq!(rotations.len(), ROTATION_COUNT);

        let inverses = rotations
            .iter()
            .map(|r| {
                let inv = r.inverse();
                let index = rotations.iter().position(|c| *c == inv);
                debug_assert!(index.is_some(), "group is closed under inversion");
                index.unwrap_or(0)
            })
            .collect();

        Self {
            rotations,
            inverses,
        }
    }

    /// Number of rotations (always 24)
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Rotation by index
    ///
    /// # Panics
    /// If `index >= 24`.
    pub fn rotation(&self, index: usize) -> &Rotation {
        &self.rotations[index]
    }

    /// All rotations in index order
    pub fn iter(&self) -> impl Iterator<Item = &Rotation> {
        self.rotations.iter()
    }

    /// Apply rotation `index` to a point.
    pub fn rotate_point(&self, p: Point3, index: usize) -> Point3 {
        self.rotations[index].apply(p)
    }

    /// Index of a rotation, if it belongs to the group.
    pub fn index_of(&self, rotation: &Rotation) -> Option<usize> {
        self.rotations.iter().position(|r| r == rotation)
    }

    /// Index of the inverse of rotation `index`.
    pub fn inverse_index(&self, index: usize) -> usize {
        self.inverses[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_abs(p: Point3) -> [i32; 3] {
        let mut c = p.abs().components();
        c.sort_unstable();
        c
    }

    #[test]
    fn test_group_has_24_distinct_rotations() {
        let group = RotationGroup::get();
        assert_eq!(group.len(), ROTATION_COUNT);

        let images: std::collections::HashSet<Point3> =
            group.iter().map(|r| r.apply(PROBE_POINT)).collect();
        assert_eq!(images.len(), ROTATION_COUNT);
    }

    #[test]
    fn test_identity_is_first() {
        assert!(RotationGroup::get().rotation(0).is_identity());
    }

    #[test]
    fn test_rotations_are_proper() {
        for r in RotationGroup::get().iter() {
            assert_eq!(r.determinant(), 1);
        }
    }

    #[test]
    fn test_rotation_preserves_norm_and_magnitudes() {
        let points = [
            Point3::new(1, 2, 3),
            Point3::new(-404, 588, 901),
            Point3::new(0, -7, 7),
        ];
        for r in RotationGroup::get().iter() {
            for &p in &points {
                let q = r.apply(p);
                assert_eq!(q.norm_squared(), p.norm_squared());
                assert_eq!(sorted_abs(q), sorted_abs(p));
            }
        }
    }

    #[test]
    fn test_closure_under_composition() {
        let group = RotationGroup::get();
        for a in group.iter() {
            for b in group.iter() {
                assert!(group.index_of(&a.compose(b)).is_some());
            }
        }
    }

    #[test]
    fn test_inverse_index() {
        let group = RotationGroup::get();
        for i in 0..group.len() {
            let inv = group.inverse_index(i);
            let product = group.rotation(i).compose(group.rotation(inv));
            assert!(product.is_identity());
        }
    }

    #[test]
    fn test_quarter_turns() {
        let p = Point3::new(1, 2, 3);
        assert_eq!(Rotation::about_x(1).apply(p), Point3::new(1, -3, 2));
        assert_eq!(Rotation::about_y(1).apply(p), Point3::new(3, 2, -1));
        assert_eq!(Rotation::about_z(1).apply(p), Point3::new(-2, 1, 3));
        assert_eq!(Rotation::about_z(4), Rotation::IDENTITY);
    }

    #[test]
    fn test_order_is_stable() {
        let a = RotationGroup::generate();
        let b = RotationGroup::generate();
        assert_eq!(a.rotations, b.rotations);
    }
}
