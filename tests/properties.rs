//! Property tests for invariants that must hold across many inputs,
//! not just the literal scenarios in `skeletonize.rs`.

use straight_skeleton::skeletonize;
use test_strategy::proptest;

/// Builds a convex polygon from `n` points placed at increasing angles
/// around a circle. The y coordinate is negated so the contour is CCW
/// in the algorithm's y-down frame (equivalently: CW, negative-area, by
/// the ordinary y-up shoelace formula `signed_area_2x` computes with).
fn convex_polygon(angles: &[f64], radius: f64) -> Vec<(f64, f64)> {
  let mut sorted = angles.to_vec();
  sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
  sorted.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
  sorted
    .into_iter()
    .map(|a| (radius * a.cos(), -radius * a.sin()))
    .collect()
}

#[proptest]
fn convex_polygons_never_error(seed: u16) {
  let n = 3 + (seed as usize % 9);
  let angles: Vec<f64> = (0..n)
    .map(|i| 2.0 * std::f64::consts::PI * (i as f64) / (n as f64))
    .collect();
  let polygon = convex_polygon(&angles, 100.0);
  let output = skeletonize(&polygon, &[]);
  assert!(output.is_ok());
}

#[proptest]
fn convex_polygons_are_deterministic(seed: u16) {
  let n = 3 + (seed as usize % 9);
  let angles: Vec<f64> = (0..n)
    .map(|i| 2.0 * std::f64::consts::PI * (i as f64) / (n as f64))
    .collect();
  let polygon = convex_polygon(&angles, 100.0);
  let first = skeletonize(&polygon, &[]).unwrap();
  let second = skeletonize(&polygon, &[]).unwrap();
  assert_eq!(first.len(), second.len());
  for (a, b) in first.iter().zip(second.iter()) {
    assert_eq!(a.source, b.source);
    assert_eq!(a.sinks, b.sinks);
  }
}

/// Testable property 3 (sink coverage): every input vertex must appear,
/// within tolerance, among the sinks of some subtree.
#[proptest]
fn convex_polygon_sink_coverage_includes_every_vertex(seed: u16) {
  let n = 3 + (seed as usize % 9);
  let angles: Vec<f64> = (0..n)
    .map(|i| 2.0 * std::f64::consts::PI * (i as f64) / (n as f64))
    .collect();
  let polygon = convex_polygon(&angles, 100.0);
  let output = skeletonize(&polygon, &[]).unwrap();
  let sinks: Vec<(f64, f64)> = output
    .iter()
    .flat_map(|s| s.sinks.iter().map(|p| (p.x, p.y)))
    .collect();
  for vertex in &polygon {
    assert!(
      sinks
        .iter()
        .any(|s| (s.0 - vertex.0).hypot(s.1 - vertex.1) < 1e-6),
      "vertex {vertex:?} missing from sinks"
    );
  }
}
