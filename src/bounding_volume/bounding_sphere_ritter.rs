//! Approximate bounding spheres of point clouds with Ritter's algorithm.
//!
//! Every function here takes the point cloud as an `I: IntoIterator + Clone` and traverses it
//! several times, each time from a fresh clone. Slices, `&Vec<_>` and cloneable iterator
//! adaptors all qualify. Each traversal must yield the same points in the same order.

use crate::bounding_volume::bounding_sphere_utils::{
    point_cloud_farthest_point, point_cloud_max_distance_squared,
};
use crate::bounding_volume::{BoundingSphere, BoundingSphereError, RitterSphere};
use crate::math::Real;
use crate::utils::AsPoint;
use na::ComplexField;

/// Relative amount the radius is grown by after each enlargement of the loose Ritter pass.
///
/// This keeps points already visited inside of the sphere in spite of rounding errors, in most
/// cases. Use [`Containment::Strict`] when containment must be guaranteed.
pub const RITTER_RADIUS_INFLATION: Real = 1.0e-10;

/// The containment guarantee of a Ritter bounding sphere computation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Containment {
    /// A single enlarging pass. A point may, very rarely, end up outside of the sphere by a
    /// distance in the order of the floating-point rounding error.
    #[default]
    Loose,
    /// The loose result followed by a verification pass growing the radius (but never moving the
    /// center) until every point satisfies `distance² <= r²` exactly.
    Strict,
}

/// Computes an approximate bounding sphere of `points`.
///
/// This is the loose variant of Ritter's algorithm: see [`Containment::Loose`]. Returns
/// [`RitterSphere::EMPTY`] if `points` is empty.
///
/// # Example
///
/// ```
/// use ritter3d::bounding_volume::ritter_bounding_sphere;
///
/// let sphere = ritter_bounding_sphere(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
/// assert_eq!(sphere.as_array(), [0.5, 0.5, 0.5, 0.75]);
///
/// let nothing: [[f64; 3]; 0] = [];
/// assert!(ritter_bounding_sphere(&nothing).is_empty());
/// ```
pub fn ritter_bounding_sphere<I>(points: I) -> RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    ritter_sphere_loose(points)
}

/// Computes an approximate bounding sphere of `points` that contains all of them exactly.
///
/// Its center is the same as the one computed by [`ritter_bounding_sphere`]. Its squared radius is
/// grown to the squared distance of the farthest point the loose pass left outside, if any. This
/// growth is negligible for well-conditioned inputs of unit scale, but can reach a relative
/// `1e-5` for tiny clouds far from the origin, where the rounding of the center dominates.
pub fn ritter_bounding_sphere_strict<I>(points: I) -> RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    ritter_sphere_strict(points)
}

/// Same as [`ritter_bounding_sphere`] but writes the result into `out`, and returns it.
pub fn ritter_bounding_sphere_to<I>(points: I, out: &mut RitterSphere) -> &mut RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    ritter_bounding_sphere_with(points, Containment::Loose, out)
}

/// Same as [`ritter_bounding_sphere_strict`] but writes the result into `out`, and returns it.
pub fn ritter_bounding_sphere_strict_to<I>(points: I, out: &mut RitterSphere) -> &mut RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    ritter_bounding_sphere_with(points, Containment::Strict, out)
}

/// Computes the Ritter bounding sphere of `points` with the given containment guarantee,
/// writes it into `out`, and returns `out`.
///
/// # Example
///
/// ```
/// use ritter3d::bounding_volume::{ritter_bounding_sphere_with, Containment, RitterSphere};
///
/// let points = [(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (0.6, 0.4, 0.3)];
/// let mut sphere = RitterSphere::EMPTY;
/// let _ = ritter_bounding_sphere_with(&points, Containment::Strict, &mut sphere);
///
/// assert_eq!(sphere.as_array(), [0.5, 0.5, 0.5, 0.75]);
/// ```
pub fn ritter_bounding_sphere_with<I>(
    points: I,
    containment: Containment,
    out: &mut RitterSphere,
) -> &mut RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    *out = match containment {
        Containment::Loose => ritter_sphere_loose(points),
        Containment::Strict => ritter_sphere_strict(points),
    };
    out
}

/// Computes the Ritter bounding sphere of `points`, as a center and a radius.
///
/// Returns [`BoundingSphereError::EmptyPointCloud`] instead of the NaN sentinel if `points`
/// is empty.
pub fn try_ritter_bounding_sphere<I>(
    points: I,
    containment: Containment,
) -> Result<BoundingSphere, BoundingSphereError>
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    if points.clone().into_iter().next().is_none() {
        return Err(BoundingSphereError::EmptyPointCloud);
    }

    let mut out = RitterSphere::EMPTY;
    let sphere = ritter_bounding_sphere_with(points, containment, &mut out);
    Ok(BoundingSphere::new(sphere.center, sphere.radius()))
}

/// Computes the Ritter bounding sphere of points given as a flat `[x0, y0, z0, x1, y1, z1, ...]`
/// coordinate buffer.
///
/// An empty buffer results in [`RitterSphere::EMPTY`].
///
/// # Example
///
/// ```
/// use ritter3d::bounding_volume::{
///     ritter_bounding_sphere_from_flat, BoundingSphereError, Containment,
/// };
///
/// let sphere = ritter_bounding_sphere_from_flat(&[1.0, 1.0, 1.0], Containment::Loose).unwrap();
/// assert_eq!(sphere.as_array(), [1.0, 1.0, 1.0, 0.0]);
///
/// assert_eq!(
///     ritter_bounding_sphere_from_flat(&[1.0, 1.0], Containment::Loose),
///     Err(BoundingSphereError::InvalidFlatBufferLength(2))
/// );
/// ```
pub fn ritter_bounding_sphere_from_flat(
    coords: &[Real],
    containment: Containment,
) -> Result<RitterSphere, BoundingSphereError> {
    if coords.len() % 3 != 0 {
        return Err(BoundingSphereError::InvalidFlatBufferLength(coords.len()));
    }

    let points = coords.chunks_exact(3).map(|c| [c[0], c[1], c[2]]);
    let mut sphere = RitterSphere::EMPTY;
    let _ = ritter_bounding_sphere_with(points, containment, &mut sphere);
    Ok(sphere)
}

fn ritter_sphere_loose<I>(points: I) -> RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    let mut iter = points.clone().into_iter();
    let x0 = match iter.next() {
        Some(pt) => pt.as_point(),
        None => return RitterSphere::EMPTY,
    };

    let (x1, d1) = point_cloud_farthest_point(iter, &x0);

    if d1 == 0.0 {
        // All the points are equal to x0.
        return RitterSphere::new(x0, 0.0);
    }

    let (x2, d2) = point_cloud_farthest_point(points.clone(), &x1);

    // Start with the sphere whose diameter is [x1, x2].
    let mut center = na::center(&x1, &x2);
    let mut sqradius = d2 / 4.0;
    let mut radius = ComplexField::sqrt(sqradius);

    // Enlarge the sphere toward every point outside of it.
    for pt in points {
        let pt = pt.as_point();
        let dpt = pt - center;
        let sqdist = dpt.norm_squared();

        if sqdist > sqradius {
            let dist = ComplexField::sqrt(sqdist);
            radius = (radius + dist) / 2.0;
            center = pt - dpt * (radius / dist);
            radius *= 1.0 + RITTER_RADIUS_INFLATION;
            sqradius = radius * radius;
        }
    }

    RitterSphere::new(center, sqradius)
}

fn ritter_sphere_strict<I>(points: I) -> RitterSphere
where
    I: IntoIterator + Clone,
    I::Item: AsPoint,
{
    let mut sphere = ritter_sphere_loose(points.clone());

    if sphere.is_empty() {
        return sphere;
    }

    let max_sqdist = point_cloud_max_distance_squared(points, &sphere.center);

    if max_sqdist > sphere.sqradius {
        log::debug!(
            "Ritter sphere centered at {:?} grown from squared radius {} to {} to contain all points.",
            sphere.center,
            sphere.sqradius,
            max_sqdist
        );
        sphere.sqradius = max_sqdist;
    }

    sphere
}
