//! Bounding sphere.

use crate::bounding_volume::RitterSphere;
use crate::math::{Point, Real};

/// A bounding sphere given by its center and radius.
///
/// Unlike [`RitterSphere`], this type has no "empty" sentinel: it always describes an actual
/// sphere. It is the result type of the fallible computations like
/// [`try_ritter_bounding_sphere`](crate::bounding_volume::try_ritter_bounding_sphere).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The squared bounding sphere radius.
    #[inline]
    pub fn squared_radius(&self) -> Real {
        self.radius * self.radius
    }

    /// Does this sphere contain `pt`?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.squared_radius()
    }

    /// Converts this sphere to its center/squared-radius representation.
    #[inline]
    pub fn to_ritter_sphere(&self) -> RitterSphere {
        RitterSphere::from(*self)
    }
}
