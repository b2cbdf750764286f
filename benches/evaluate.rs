use closed_cubic_splines::{
    evaluate_cached, evaluate_direct, point_cache, tvector, Knot, SplineType,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_random_knots(n: usize, seed: u64) -> Vec<Knot> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            Knot::new(Vec3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            ))
            .with_tangent(Vec3::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
            ))
        })
        .collect()
}

fn benchmark_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Evaluation Strategies");

    const SEED: u64 = 12345;
    let knots = generate_random_knots(16, SEED);

    let mut cache = Vec::new();
    point_cache::rebuild(&mut cache, &knots, SplineType::Bezier);

    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let samples: Vec<(usize, f32)> = (0..1024)
        .map(|_| (rng.random_range(0..cache.len()), rng.random_range(0.0..1.0)))
        .collect();

    group.bench_function("matrix path", |b| {
        let mut i = 0;
        b.iter(|| {
            let (segment, t) = samples[i % samples.len()];
            i += 1;
            black_box(evaluate_cached(
                SplineType::Bezier,
                cache[segment],
                tvector::position(t),
            ))
        });
    });

    group.bench_function("direct path", |b| {
        let mut i = 0;
        b.iter(|| {
            let (segment, t) = samples[i % samples.len()];
            i += 1;
            let pm = cache[segment];
            black_box(evaluate_direct(
                SplineType::Bezier,
                pm.x_axis.truncate(),
                pm.y_axis.truncate(),
                pm.z_axis.truncate(),
                pm.w_axis.truncate(),
                t,
            ))
        });
    });

    group.finish();
}

fn benchmark_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("Point Cache Rebuild");

    const SEED: u64 = 54321;

    for num_knots in [4, 16, 64, 256] {
        let knots = generate_random_knots(num_knots, SEED + num_knots as u64);

        for ty in [
            SplineType::Bezier,
            SplineType::Hermite,
            SplineType::CatmullRom,
            SplineType::BSpline,
        ] {
            let mut cache = Vec::with_capacity(num_knots);
            group.bench_function(
                BenchmarkId::new(format!("{ty:?}"), num_knots),
                |b| {
                    b.iter(|| {
                        point_cache::rebuild(&mut cache, black_box(&knots), ty);
                        black_box(cache.len())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_evaluation, benchmark_rebuild);
criterion_main!(benches);
