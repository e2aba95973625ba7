use crate::math::{Point, Real};
use crate::utils::AsPoint;

/// Computes the geometric center (centroid) of a set of points.
///
/// Every point is weighted equally. Accepts any point representation
/// implementing [`AsPoint`].
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use ritter3d::utils::center;
/// use ritter3d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
///
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-12);
/// assert!(c.z.abs() < 1e-12);
/// ```
#[inline]
pub fn center<P: AsPoint>(pts: &[P]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / (pts.len() as Real);

    let mut res = Point::origin();

    for pt in pts {
        res += pt.as_point().coords * denom;
    }

    res
}
