use approx::assert_relative_eq;
use na::{Point3, Vector3};
use ritter3d::bounding_volume::details::point_cloud_bounding_sphere;
use ritter3d::bounding_volume::{
    ritter_bounding_sphere, ritter_bounding_sphere_from_flat, ritter_bounding_sphere_with,
    try_ritter_bounding_sphere, BoundingSphereError, Containment, RitterSphere,
};

const CLOUD: [[f64; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [2.0, 0.5, -1.0],
    [-1.0, 3.0, 0.25],
    [0.5, -2.0, 1.5],
    [1.0, 1.0, 4.0],
    [-0.5, 0.0, -3.0],
];

#[test]
fn point_representations_give_the_same_sphere() {
    let expected = ritter_bounding_sphere(&CLOUD);

    let points: Vec<_> = CLOUD.iter().map(|p| Point3::from(*p)).collect();
    let vectors: Vec<_> = CLOUD.iter().map(|p| Vector3::from(*p)).collect();
    let tuples: Vec<_> = CLOUD.iter().map(|p| (p[0], p[1], p[2])).collect();

    assert_eq!(ritter_bounding_sphere(&points), expected);
    assert_eq!(ritter_bounding_sphere(&vectors), expected);
    assert_eq!(ritter_bounding_sphere(&tuples), expected);
    assert_eq!(ritter_bounding_sphere(CLOUD.iter().copied()), expected);
}

#[test]
fn flat_buffer_matches_points() {
    let flat: Vec<f64> = CLOUD.iter().flatten().copied().collect();

    for containment in [Containment::Loose, Containment::Strict] {
        let mut expected = RitterSphere::EMPTY;
        let _ = ritter_bounding_sphere_with(&CLOUD, containment, &mut expected);

        assert_eq!(
            ritter_bounding_sphere_from_flat(&flat, containment),
            Ok(expected)
        );
    }
}

#[test]
fn flat_buffer_errors() {
    assert_eq!(
        ritter_bounding_sphere_from_flat(&[0.0; 7], Containment::Loose),
        Err(BoundingSphereError::InvalidFlatBufferLength(7))
    );
    assert!(ritter_bounding_sphere_from_flat(&[], Containment::Strict)
        .unwrap()
        .is_empty());
    assert_eq!(
        BoundingSphereError::InvalidFlatBufferLength(7).to_string(),
        "the flat coordinate buffer has length 7, which is not a multiple of 3."
    );
}

#[test]
fn try_variant_reports_empty_clouds() {
    let empty: [[f64; 3]; 0] = [];
    assert_eq!(
        try_ritter_bounding_sphere(&empty, Containment::Loose),
        Err(BoundingSphereError::EmptyPointCloud)
    );

    let bs = try_ritter_bounding_sphere(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]], Containment::Loose)
        .unwrap();
    assert_eq!(bs.center, Point3::new(0.5, 0.5, 0.5));
    assert_relative_eq!(bs.radius, 0.75f64.sqrt());
}

#[test]
fn try_variant_matches_the_sentinel_variant() {
    let strict = try_ritter_bounding_sphere(&CLOUD, Containment::Strict).unwrap();
    let expected = ritter_bounding_sphere_with(&CLOUD, Containment::Strict, &mut RitterSphere::EMPTY)
        .to_bounding_sphere()
        .unwrap();

    assert_eq!(strict, expected);

    for pt in &CLOUD {
        assert!(strict.radius * (1.0 + 1.0e-12) >= na::distance(&strict.center, &Point3::from(*pt)));
    }
}

#[test]
fn ritter_and_centroid_spheres_both_bound_the_cloud() {
    let (centroid, centroid_radius) = point_cloud_bounding_sphere(&CLOUD);
    let sphere = ritter_bounding_sphere(&CLOUD);

    // No enclosing sphere can be smaller than half the diameter of the cloud.
    let mut diameter: f64 = 0.0;
    for a in &CLOUD {
        for b in &CLOUD {
            diameter = diameter.max(na::distance(&Point3::from(*a), &Point3::from(*b)));
        }
    }

    assert!(sphere.radius() >= diameter / 2.0 * (1.0 - 1.0e-12));
    assert!(centroid_radius >= diameter / 2.0 * (1.0 - 1.0e-12));

    for pt in &CLOUD {
        let pt = Point3::from(*pt);
        assert!(na::distance(&centroid, &pt) <= centroid_radius);
        assert!(na::distance_squared(&sphere.center, &pt) <= sphere.sqradius + 1.0e-12);
    }
}
