//! Bounding spheres, and Ritter bounding spheres of point clouds.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
pub use crate::bounding_volume::bounding_sphere_ritter::{
    ritter_bounding_sphere, ritter_bounding_sphere_from_flat, ritter_bounding_sphere_strict,
    ritter_bounding_sphere_strict_to, ritter_bounding_sphere_to, ritter_bounding_sphere_with,
    try_ritter_bounding_sphere, Containment, RITTER_RADIUS_INFLATION,
};
pub use crate::bounding_volume::error::BoundingSphereError;
#[doc(inline)]
pub use crate::bounding_volume::ritter_sphere::RitterSphere;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_ritter;
mod bounding_sphere_utils;
mod error;
#[doc(hidden)]
pub mod ritter_sphere;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::bounding_sphere_utils::{
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
        point_cloud_farthest_point, point_cloud_max_distance_squared,
    };
}
