use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vector2d::core::math::{Vector2, vec2};

fn sample_vectors(count: usize) -> Vec<Vector2> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.37;
            vec2(t.cos() * (1.0 + t), t.sin() * (2.0 + t))
        })
        .collect()
}

fn magnitude_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");
    for &count in &[16, 256, 4096] {
        let vs = sample_vectors(count);
        group.bench_with_input(BenchmarkId::new("normalize", count), &vs, |b, vs| {
            b.iter(|| vs.iter().map(|v| v.normalize()).fold(Vector2::zero(), |acc, n| acc + n))
        });
        group.bench_with_input(BenchmarkId::new("limit", count), &vs, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|v| v.limit(black_box(3.0)))
                    .fold(Vector2::zero(), |acc, n| acc + n)
            })
        });
    }

    group.finish();
}

fn angle_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle");
    for &count in &[16, 256, 4096] {
        let vs = sample_vectors(count);
        group.bench_with_input(BenchmarkId::new("angle", count), &vs, |b, vs| {
            b.iter(|| vs.windows(2).map(|w| w[0].angle(w[1])).sum::<f64>())
        });
        group.bench_with_input(BenchmarkId::new("angle2", count), &vs, |b, vs| {
            b.iter(|| vs.windows(2).map(|w| w[0].angle2(w[1])).sum::<f64>())
        });
    }

    group.finish();
}

criterion_group!(vector_ops, magnitude_group, angle_group);
criterion_main!(vector_ops);
