use std::ops::{Add, Sub};

use super::Vector;

/// A point in the plane, where the y-axis is expected to grow downward
/// (the convention the straight-skeleton algorithm is specified against).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  pub fn as_vec(&self) -> Vector {
    Vector::new(self.x, self.y)
  }

  pub fn distance_to(&self, other: &Point) -> f64 {
    (*self - *other).magnitude()
  }

  /// Equality with the same relative tolerance as the reference
  /// implementation's `_approximately_equals`: exact equality, or within
  /// 0.1% of the larger operand's magnitude.
  pub fn approx_eq(&self, other: &Point) -> bool {
    self == other || {
      let d = (*self - *other).magnitude();
      let scale = self.as_vec().magnitude().max(other.as_vec().magnitude());
      d <= scale * 0.001
    }
  }
}

impl From<(f64, f64)> for Point {
  fn from((x, y): (f64, f64)) -> Point {
    Point::new(x, y)
  }
}

impl From<Point> for (f64, f64) {
  fn from(p: Point) -> (f64, f64) {
    (p.x, p.y)
  }
}

// point - point = vector
impl Sub<Point> for Point {
  type Output = Vector;
  fn sub(self, other: Point) -> Vector {
    Vector::new(self.x - other.x, self.y - other.y)
  }
}

// point + vector = point
impl Add<Vector> for Point {
  type Output = Point;
  fn add(self, other: Vector) -> Point {
    Point::new(self.x + other.x, self.y + other.y)
  }
}

// point - vector = point
impl Sub<Vector> for Point {
  type Output = Point;
  fn sub(self, other: Vector) -> Point {
    Point::new(self.x - other.x, self.y - other.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sub_gives_vector() {
    let p = Point::new(3.0, 4.0);
    let q = Point::new(1.0, 1.0);
    assert_eq!(p - q, Vector::new(2.0, 3.0));
  }

  #[test]
  fn approx_eq_exact() {
    assert!(Point::new(1.0, 2.0).approx_eq(&Point::new(1.0, 2.0)));
  }

  #[test]
  fn approx_eq_within_relative_tolerance() {
    let p = Point::new(1000.0, 0.0);
    let q = Point::new(1000.5, 0.0);
    assert!(p.approx_eq(&q));
  }

  #[test]
  fn approx_eq_rejects_far_points() {
    assert!(!Point::new(0.0, 0.0).approx_eq(&Point::new(10.0, 10.0)));
  }
}
