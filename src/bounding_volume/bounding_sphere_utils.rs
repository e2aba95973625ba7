use crate::math::{Point, Real};
use crate::utils::{self, AsPoint};
use na::ComplexField;

/// Finds the point of `pts` farthest from `from`, with its squared distance.
///
/// Ties keep the first point found. If no point is strictly farther than `0.0`, returns
/// `(*from, 0.0)`.
#[inline]
pub fn point_cloud_farthest_point<I>(pts: I, from: &Point<Real>) -> (Point<Real>, Real)
where
    I: IntoIterator,
    I::Item: AsPoint,
{
    let mut best = *from;
    let mut best_sqdist = 0.0;

    for pt in pts {
        let pt = pt.as_point();
        let sqdist = na::distance_squared(from, &pt);

        if sqdist > best_sqdist {
            best = pt;
            best_sqdist = sqdist;
        }
    }

    (best, best_sqdist)
}

/// Computes the largest squared distance between `center` and any of the given points.
///
/// Returns `0.0` if there is no point.
#[inline]
pub fn point_cloud_max_distance_squared<I>(pts: I, center: &Point<Real>) -> Real
where
    I: IntoIterator,
    I::Item: AsPoint,
{
    point_cloud_farthest_point(pts, center).1
}

/// Computes the bounding sphere of a set of point, given its center.
#[inline]
pub fn point_cloud_bounding_sphere_with_center<P: AsPoint>(
    pts: &[P],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let sqradius = point_cloud_max_distance_squared(pts, &center);
    (center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding sphere of the specified set of point, centered at their centroid.
///
/// The result always contains every point exactly but is usually larger than the sphere
/// computed by [`ritter_bounding_sphere`](crate::bounding_volume::ritter_bounding_sphere).
///
/// # Panics
///
/// Panics if `pts` is empty.
#[inline]
pub fn point_cloud_bounding_sphere<P: AsPoint>(pts: &[P]) -> (Point<Real>, Real) {
    point_cloud_bounding_sphere_with_center(pts, utils::center(pts))
}
