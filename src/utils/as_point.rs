use crate::math::{Point, Real, Vector};

/// Trait implemented by every type that can be read as a 3D point.
///
/// The bounding sphere computations are generic over this trait so that
/// point clouds stored as nalgebra points, plain arrays, or tuples can be
/// used without being copied into a dedicated buffer first.
pub trait AsPoint {
    /// The point represented by `self`.
    fn as_point(&self) -> Point<Real>;
}

impl AsPoint for Point<Real> {
    #[inline]
    fn as_point(&self) -> Point<Real> {
        *self
    }
}

impl AsPoint for Vector<Real> {
    #[inline]
    fn as_point(&self) -> Point<Real> {
        Point::from(*self)
    }
}

impl AsPoint for [Real; 3] {
    #[inline]
    fn as_point(&self) -> Point<Real> {
        Point::new(self[0], self[1], self[2])
    }
}

impl AsPoint for (Real, Real, Real) {
    #[inline]
    fn as_point(&self) -> Point<Real> {
        Point::new(self.0, self.1, self.2)
    }
}

impl<T: AsPoint + ?Sized> AsPoint for &T {
    #[inline]
    fn as_point(&self) -> Point<Real> {
        (**self).as_point()
    }
}
