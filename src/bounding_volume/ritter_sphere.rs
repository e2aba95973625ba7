//! Bounding sphere stored with its squared radius.

use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use approx::{AbsDiffEq, RelativeEq};
use na::ComplexField;

/// A sphere given by its center and its **squared** radius.
///
/// This is the value produced by the Ritter bounding sphere computations. Keeping the radius
/// squared lets containment tests avoid square roots entirely. Its memory layout is the one of
/// `[x, y, z, r²]`.
///
/// A sphere computed from an empty point cloud is the sentinel [`RitterSphere::EMPTY`], with every
/// component set to NaN. Because NaN never compares equal to anything, use
/// [`RitterSphere::is_empty`] to detect it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct RitterSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The squared radius of the sphere.
    pub sqradius: Real,
}

static_assertions::assert_eq_size!(RitterSphere, [Real; 4]);

impl Default for RitterSphere {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl RitterSphere {
    /// The sphere returned when bounding an empty set of points.
    pub const EMPTY: Self = Self {
        center: Point::new(Real::NAN, Real::NAN, Real::NAN),
        sqradius: Real::NAN,
    };

    /// Creates a new sphere from its center and squared radius.
    #[inline]
    pub fn new(center: Point<Real>, sqradius: Real) -> Self {
        Self { center, sqradius }
    }

    /// Is this the sentinel value of an empty point cloud?
    ///
    /// Any NaN component marks the sphere as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.center.iter().any(|e| e.is_nan()) || self.sqradius.is_nan()
    }

    /// The sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The squared sphere radius.
    #[inline]
    pub fn squared_radius(&self) -> Real {
        self.sqradius
    }

    /// The sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        ComplexField::sqrt(self.sqradius)
    }

    /// Does this sphere contain `pt`?
    ///
    /// The comparison is exact: no tolerance is applied. Always `false` for the empty sphere.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.sqradius
    }

    /// Converts this sphere to its center/radius representation.
    ///
    /// Returns `None` for the empty sphere.
    #[inline]
    pub fn to_bounding_sphere(&self) -> Option<BoundingSphere> {
        if self.is_empty() {
            None
        } else {
            Some(BoundingSphere::new(self.center, self.radius()))
        }
    }

    /// The `[x, y, z, r²]` components of this sphere.
    #[inline]
    pub fn as_array(&self) -> [Real; 4] {
        [self.center.x, self.center.y, self.center.z, self.sqradius]
    }
}

impl From<[Real; 4]> for RitterSphere {
    #[inline]
    fn from(arr: [Real; 4]) -> Self {
        Self::new(Point::new(arr[0], arr[1], arr[2]), arr[3])
    }
}

impl From<RitterSphere> for [Real; 4] {
    #[inline]
    fn from(sphere: RitterSphere) -> Self {
        sphere.as_array()
    }
}

impl From<(Real, Real, Real, Real)> for RitterSphere {
    #[inline]
    fn from(t: (Real, Real, Real, Real)) -> Self {
        Self::new(Point::new(t.0, t.1, t.2), t.3)
    }
}

impl From<RitterSphere> for (Real, Real, Real, Real) {
    #[inline]
    fn from(sphere: RitterSphere) -> Self {
        (
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.sqradius,
        )
    }
}

impl From<BoundingSphere> for RitterSphere {
    #[inline]
    fn from(sphere: BoundingSphere) -> Self {
        Self::new(sphere.center, sphere.radius * sphere.radius)
    }
}

impl AbsDiffEq for RitterSphere {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.sqradius.abs_diff_eq(&other.sqradius, epsilon)
    }
}

impl RelativeEq for RitterSphere {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self
                .sqradius
                .relative_eq(&other.sqradius, epsilon, max_relative)
    }
}
