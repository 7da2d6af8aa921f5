//! Benchmarks for diffuse map synthesis at several image sizes

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use meshchart_core::{Point3d, PointCloud};
use meshchart_reconstruction::{MeshComposite, SpadeTriangulator, IdentityAdapter, TextureSynthesizer, triangulate_composite};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const IMAGE_SIZES: [u32; 3] = [64, 128, 256];

fn generate_composite(num_points: usize) -> MeshComposite {
    let mut rng = StdRng::seed_from_u64(17);
    let cloud: PointCloud = (0..num_points)
        .map(|_| {
            let x: f64 = rng.gen_range(0.0..10.0);
            let z: f64 = rng.gen_range(0.0..10.0);
            Point3d::new(x, (x * 0.7).sin() + (z * 0.3).cos(), z)
        })
        .collect();
    let mut composite = MeshComposite::new(&cloud, 400).unwrap();
    triangulate_composite(&mut composite, &IdentityAdapter, &SpadeTriangulator).unwrap();
    composite
}

fn texture_synthesis(c: &mut Criterion) {
    let composite = generate_composite(500);

    let mut g = c.benchmark_group("texture synthesis");
    g.sample_size(10);

    for size in IMAGE_SIZES {
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let synthesizer = TextureSynthesizer::new(size);
            b.iter(|| synthesizer.synthesize_composite(std::hint::black_box(&composite)).unwrap());
        });
    }

    g.finish();
}

criterion_group!(benches, texture_synthesis);
criterion_main!(benches);
