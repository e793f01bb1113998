//! Math type re-exports and mesh math utilities.
//!
//! Positions and normals are handled in double precision, matching the
//! widened storage of element values.

pub use glam::{dvec3, DVec3};

use std::fmt;

/// 3D bounding box with double precision.
#[derive(Clone, Copy, PartialEq)]
pub struct BBox3d {
    pub min: DVec3,
    pub max: DVec3,
}

impl BBox3d {
    /// Empty bounding box (inverted, will expand on first point).
    pub const EMPTY: Self = Self {
        min: DVec3::splat(f64::INFINITY),
        max: DVec3::splat(f64::NEG_INFINITY),
    };

    /// Check if this box is empty (has no points).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Expand this box to include a point.
    #[inline]
    pub fn expand_by_point(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Get the center of the box.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size (extents) of the box.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

impl Default for BBox3d {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for BBox3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox3d({:?} - {:?})", self.min, self.max)
    }
}

/// Divide by length, zero vector stays zero.
///
/// Division instead of multiplying with the reciprocal keeps axis-aligned
/// results exact (`(0, 0, a)` becomes exactly `(0, 0, 1)`).
#[inline]
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        DVec3::ZERO
    }
}

/// Angle between two vectors in radians, 0 if either is zero-length.
///
/// The cosine is clamped to [-1, 1] before `acos` so rounding never
/// produces NaN for (anti)parallel edges.
#[inline]
pub fn angle_between(a: DVec3, b: DVec3) -> f64 {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_bbox3d() {
        let mut b = BBox3d::EMPTY;
        assert!(b.is_empty());

        b.expand_by_point(DVec3::new(-1.0, -1.0, -1.0));
        b.expand_by_point(DVec3::new(1.0, 1.0, 1.0));

        assert!(!b.is_empty());
        assert_eq!(b.center(), DVec3::ZERO);
        assert_eq!(b.size(), DVec3::splat(2.0));
    }

    #[test]
    fn test_normalize_exact_axis() {
        let n = normalize_or_zero(dvec3(0.0, 0.0, FRAC_PI_4 * 3.0));
        assert_eq!(n, DVec3::Z);
        assert_eq!(normalize_or_zero(DVec3::ZERO), DVec3::ZERO);
    }

    #[test]
    fn test_angle_between() {
        assert!((angle_between(DVec3::X, DVec3::Y) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_between(DVec3::X, dvec3(1.0, 1.0, 0.0)) - FRAC_PI_4).abs() < 1e-12);
        assert_eq!(angle_between(DVec3::ZERO, DVec3::X), 0.0);
        // Clamping keeps antiparallel vectors finite.
        let a = dvec3(0.1, 0.2, 0.3);
        assert!((angle_between(a, -a) - PI).abs() < 1e-7);
        assert!(!angle_between(a, a * 3.0).is_nan());
    }
}
