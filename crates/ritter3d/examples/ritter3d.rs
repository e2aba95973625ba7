extern crate nalgebra as na;

use ritter3d::bounding_volume::{
    ritter_bounding_sphere, ritter_bounding_sphere_strict, ritter_bounding_sphere_to, RitterSphere,
};
use ritter3d::math::Point;

fn main() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
    ];

    /*
     * Compute the loose and strict spheres.
     */
    let loose = ritter_bounding_sphere(&points);
    let strict = ritter_bounding_sphere_strict(&points);

    println!(
        "loose: center {}, radius {}",
        loose.center,
        loose.radius()
    );
    println!(
        "strict: center {}, radius {}",
        strict.center,
        strict.radius()
    );

    assert_eq!(loose.center, strict.center);
    assert!(points.iter().all(|pt| strict.contains_local_point(pt)));

    /*
     * Reuse the same output sphere for several point clouds.
     */
    let mut sphere = RitterSphere::EMPTY;

    for scale in [1.0, 2.0, 4.0] {
        let scaled = points.map(|pt| na::Point3::from(pt.coords * scale));
        let _ = ritter_bounding_sphere_to(&scaled, &mut sphere);
        println!("scale {}: {:?}", scale, sphere.as_array());
    }
}
