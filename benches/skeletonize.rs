use criterion::{criterion_group, criterion_main, Criterion};
use straight_skeleton::skeletonize;

fn regular_polygon(n: usize, radius: f64) -> Vec<(f64, f64)> {
  (0..n)
    .map(|i| {
      let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
      (radius * angle.cos(), radius * angle.sin())
    })
    .collect()
}

fn star_polygon(points: usize, outer_radius: f64, inner_radius: f64) -> Vec<(f64, f64)> {
  let n = points * 2;
  (0..n)
    .map(|i| {
      let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
      let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
      (radius * angle.cos(), radius * angle.sin())
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let convex_20 = regular_polygon(20, 100.0);
  let convex_200 = regular_polygon(200, 100.0);
  let star_20 = star_polygon(10, 100.0, 40.0);

  c.bench_function("skeletonize(convex, 20 vertices)", |b| {
    b.iter(|| skeletonize(&convex_20, &[]))
  });
  c.bench_function("skeletonize(convex, 200 vertices)", |b| {
    b.iter(|| skeletonize(&convex_200, &[]))
  });
  c.bench_function("skeletonize(star, 20 vertices)", |b| {
    b.iter(|| skeletonize(&star_20, &[]))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
