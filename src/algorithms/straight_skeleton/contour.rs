use crate::data::Point;

/// Strips consecutive duplicate vertices and any vertex whose incoming and
/// outgoing edge directions are identical (a vertex sitting in the middle
/// of what is effectively one straight run).
pub fn normalize_contour(points: &[(f64, f64)]) -> Vec<Point> {
  let mut pts: Vec<Point> = Vec::with_capacity(points.len());
  for &(x, y) in points {
    let p = Point::new(x, y);
    if pts.last() != Some(&p) {
      pts.push(p);
    }
  }
  if pts.len() > 1 && pts.first() == pts.last() {
    pts.pop();
  }

  loop {
    let n = pts.len();
    if n < 3 {
      break;
    }
    let collinear = (0..n).find(|&i| {
      let prev = pts[(i + n - 1) % n];
      let cur = pts[i];
      let next = pts[(i + 1) % n];
      let d_in = (cur - prev).normalize();
      let d_out = (next - cur).normalize();
      d_in == d_out
    });
    match collinear {
      Some(i) => {
        pts.remove(i);
      }
      None => break,
    }
  }
  pts
}

/// Twice the signed area of a closed contour. Positive for
/// counter-clockwise winding, negative for clockwise, matching the
/// convention used to validate polygon winding elsewhere in this crate.
pub fn signed_area_2x(points: &[Point]) -> f64 {
  let n = points.len();
  let mut total = 0.0;
  for i in 0..n {
    let p = points[i];
    let q = points[(i + 1) % n];
    total += p.x * q.y - q.x * p.y;
  }
  total
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn drops_consecutive_duplicates() {
    let pts = normalize_contour(&[(0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert_eq!(pts.len(), 3);
  }

  #[test]
  fn drops_closing_duplicate_of_first_point() {
    let pts = normalize_contour(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]);
    assert_eq!(pts.len(), 3);
  }

  #[test]
  fn drops_collinear_forward_vertex() {
    let pts = normalize_contour(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert_eq!(pts.len(), 3);
  }

  #[test]
  fn square_has_positive_signed_area() {
    let pts = normalize_contour(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert!(signed_area_2x(&pts) > 0.0);
  }

  #[test]
  fn reversed_square_has_negative_signed_area() {
    let pts = normalize_contour(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
    assert!(signed_area_2x(&pts) < 0.0);
  }
}
