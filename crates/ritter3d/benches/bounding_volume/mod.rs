use na::Point3;
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;
use ritter3d::bounding_volume::details::point_cloud_bounding_sphere;
use ritter3d::bounding_volume::{
    ritter_bounding_sphere, ritter_bounding_sphere_strict, ritter_bounding_sphere_to,
    RitterSphere,
};
use test::Bencher;

fn generate_cloud(n: usize) -> Vec<Point3<f64>> {
    let mut rng = IsaacRng::seed_from_u64(0);
    (0..n).map(|_| rng.gen::<Point3<f64>>() * 3.0).collect()
}

#[bench]
fn bench_ritter_sphere_loose(bh: &mut Bencher) {
    let cloud = generate_cloud(3000);
    bh.iter(|| test::black_box(ritter_bounding_sphere(&cloud)))
}

#[bench]
fn bench_ritter_sphere_strict(bh: &mut Bencher) {
    let cloud = generate_cloud(3000);
    bh.iter(|| test::black_box(ritter_bounding_sphere_strict(&cloud)))
}

#[bench]
fn bench_ritter_sphere_loose_in_place(bh: &mut Bencher) {
    let cloud = generate_cloud(3000);
    let mut sphere = RitterSphere::EMPTY;
    bh.iter(|| {
        let _ = test::black_box(ritter_bounding_sphere_to(&cloud, &mut sphere));
    })
}

#[bench]
fn bench_centroid_sphere(bh: &mut Bencher) {
    let cloud = generate_cloud(3000);
    bh.iter(|| test::black_box(point_cloud_bounding_sphere(&cloud)))
}
