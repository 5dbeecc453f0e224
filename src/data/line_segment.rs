use super::{Point, Vector};

/// A directed line segment, used to represent one edge of the input
/// polygon. `p` is the start point and `v` the vector to the end point.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
  pub p: Point,
  pub v: Vector,
}

impl LineSegment {
  pub fn new(start: Point, end: Point) -> LineSegment {
    LineSegment {
      p: start,
      v: end - start,
    }
  }

  pub fn start(&self) -> Point {
    self.p
  }

  pub fn end(&self) -> Point {
    self.p + self.v
  }

  pub fn direction(&self) -> Vector {
    self.v
  }

  pub fn length(&self) -> f64 {
    self.v.magnitude()
  }

  /// Perpendicular distance from `point` to the infinite line carrying
  /// this segment. Used to rank edge-event candidates, which compares
  /// distance to the supporting line rather than to the segment itself.
  pub fn distance_to_point(&self, point: &Point) -> f64 {
    let to_point = *point - self.p;
    (to_point.cross(&self.v) / self.v.magnitude()).abs()
  }
}
