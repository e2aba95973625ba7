/// Errors returned by the fallible bounding sphere computations.
///
/// The infallible functions like [`ritter_bounding_sphere`] never fail: they report an empty point
/// cloud through the NaN sentinel [`RitterSphere::EMPTY`]. The `try_` variants turn that case
/// into [`BoundingSphereError::EmptyPointCloud`] instead.
///
/// [`ritter_bounding_sphere`]: crate::bounding_volume::ritter_bounding_sphere
/// [`RitterSphere::EMPTY`]: crate::bounding_volume::RitterSphere::EMPTY
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundingSphereError {
    /// No point was given, so there is no sphere to return.
    #[error("cannot compute the bounding sphere of an empty point cloud.")]
    EmptyPointCloud,
    /// A flat coordinate buffer has a length that is not a multiple of 3.
    #[error("the flat coordinate buffer has length {0}, which is not a multiple of 3.")]
    InvalidFlatBufferLength(usize),
}
