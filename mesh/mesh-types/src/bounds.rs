//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

use crate::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extents at or below this count as zero wherever a measurement is divided
/// by.
pub const MIN_EXTENT: f64 = 1e-12;

/// An axis-aligned bounding box in world space.
///
/// A box built through [`Bounds3::new`] always has `min <= max` on every
/// axis. The only box that violates it is the [empty](Bounds3::empty) box,
/// which is what [`Bounds3::expand_to_include`] starts from.
///
/// # Example
///
/// ```
/// use mesh_types::{Bounds3, Point3};
///
/// let bounds = Bounds3::new(
///     Point3::new(-0.5, -1.0, -0.25),
///     Point3::new(0.5, 1.0, 0.25),
/// );
///
/// assert_eq!(bounds.size().y, 2.0);
/// assert_eq!(bounds.center(), Point3::origin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds3 {
    /// Lowest corner.
    pub min: Point3<f64>,
    /// Highest corner.
    pub max: Point3<f64>,
}

impl Bounds3 {
    /// Create a box from two opposite corners, in any order.
    ///
    /// ```
    /// use mesh_types::{Bounds3, Point3};
    ///
    /// let bounds = Bounds3::new(Point3::new(1.0, 0.0, 3.0), Point3::new(0.0, 2.0, 0.0));
    /// assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
    /// assert_eq!(bounds.max, Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// The box that contains nothing.
    ///
    /// `min` is `+inf` and `max` is `-inf`, so the first point it is expanded
    /// by becomes both corners.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::from(Vector3::repeat(f64::INFINITY)),
            max: Point3::from(Vector3::repeat(f64::NEG_INFINITY)),
        }
    }

    /// Smallest box enclosing every point; empty if there are none.
    ///
    /// ```
    /// use mesh_types::{Bounds3, Point3};
    ///
    /// let points = [
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 5.0, 3.0),
    ///     Point3::new(-2.0, 8.0, 1.0),
    /// ];
    ///
    /// let bounds = Bounds3::from_points(points.iter());
    /// assert_eq!(bounds.min, Point3::new(-2.0, 0.0, 0.0));
    /// assert_eq!(bounds.max, Point3::new(10.0, 8.0, 3.0));
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        points.fold(Self::empty(), |mut bounds, point| {
            bounds.expand_to_include(point);
            bounds
        })
    }

    /// True if no point has been included. Flat boxes are not empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min
            .coords
            .iter()
            .zip(self.max.coords.iter())
            .any(|(lo, hi)| lo > hi)
    }

    /// True if both corners are finite. A box grown from a NaN or infinite
    /// vertex is not.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min
            .coords
            .iter()
            .chain(self.max.coords.iter())
            .all(|c| c.is_finite())
    }

    /// Extents along x, y and z. Zero for an empty box.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        if self.is_empty() {
            Vector3::zeros()
        } else {
            self.max - self.min
        }
    }

    /// Midpoint of the box. The origin for an empty box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        if self.is_empty() {
            return Point3::origin();
        }
        Point3::from(self.min.coords.zip_map(&self.max.coords, f64::midpoint))
    }

    /// Longest extent.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }

    /// First axis whose extent is at most `epsilon`.
    #[must_use]
    pub fn degenerate_axis(&self, epsilon: f64) -> Option<Axis> {
        let size = self.size();
        Axis::ALL.into_iter().find(|axis| size[axis.index()] <= epsilon)
    }

    /// Grow the box so it contains `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// The eight corners. Bit 0 of the index selects max x, bit 1 max y and
    /// bit 2 max z.
    #[must_use]
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let pick = |i: usize, bit: usize, axis: usize| {
            if i & (1 << bit) == 0 {
                self.min[axis]
            } else {
                self.max[axis]
            }
        };
        std::array::from_fn(|i| Point3::new(pick(i, 0, 0), pick(i, 1, 1), pick(i, 2, 2)))
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_are_reordered() {
        let b = Bounds3::new(Point3::new(1.0, -1.0, 2.0), Point3::new(-1.0, 1.0, 0.0));
        assert_relative_eq!(b.min, Point3::new(-1.0, -1.0, 0.0));
        assert_relative_eq!(b.max, Point3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn empty_box() {
        let b = Bounds3::default();
        assert!(b.is_empty());
        assert_eq!(b.size(), Vector3::zeros());
        assert_eq!(b.center(), Point3::origin());
        assert!(Bounds3::from_points(std::iter::empty()).is_empty());
    }

    #[test]
    fn one_point_is_flat_not_empty() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let b = Bounds3::from_points(std::iter::once(&p));
        assert!(!b.is_empty());
        assert_eq!(b.min, b.max);
        assert_eq!(b.degenerate_axis(0.0), Some(Axis::X));
    }

    #[test]
    fn avatar_sized_box() {
        let b = Bounds3::new(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25));
        assert_relative_eq!(b.size(), Vector3::new(1.0, 2.0, 0.5));
        assert_relative_eq!(b.center(), Point3::origin());
        assert_relative_eq!(b.max_extent(), 2.0);
        assert_eq!(b.degenerate_axis(1e-12), None);
    }

    #[test]
    fn non_finite_vertex_poisons_box() {
        let points = [Point3::origin(), Point3::new(1.0, f64::INFINITY, 1.0)];
        assert!(!Bounds3::from_points(points.iter()).is_finite());

        let nan = [Point3::new(f64::NAN, 2.0, 0.5)];
        assert!(!Bounds3::from_points(nan.iter()).is_finite());

        let solid = Bounds3::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        assert!(solid.is_finite());
        assert!(!Bounds3::empty().is_finite());
    }

    #[test]
    fn flat_box_reports_axis() {
        let flat = Bounds3::new(Point3::origin(), Point3::new(1.0, 1.0, 0.0));
        assert_eq!(flat.degenerate_axis(1e-12), Some(Axis::Z));
    }

    #[test]
    fn corner_order() {
        let b = Bounds3::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0));
        let c = b.corners();
        assert_eq!(c[0], b.min);
        assert_eq!(c[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(c[2], Point3::new(0.0, 2.0, 0.0));
        assert_eq!(c[4], Point3::new(0.0, 0.0, 3.0));
        assert_eq!(c[7], b.max);
    }
}
