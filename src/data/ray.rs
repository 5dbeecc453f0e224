use super::{Point, Vector};

/// A ray used to represent an angle bisector emanating from a vertex of
/// the wavefront. Unlike a `LineSegment`, its `intersect_ray` does not
/// clamp to the forward half — the reference implementation intersects
/// bisectors as full lines and lets the caller reject results that land
/// behind the origin.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
  pub origin: Point,
  pub direction: Vector,
}

impl Ray {
  pub fn new(origin: Point, direction: Vector) -> Ray {
    Ray { origin, direction }
  }

  pub fn point_at(&self, t: f64) -> Point {
    self.origin + self.direction * t
  }

  /// Solves the linear system `self.origin + t * self.direction ==
  /// other.origin + u * other.direction` for `t`, returning the resulting
  /// point. No clamp is applied to `t` or `u`: bisectors are treated as
  /// full lines for the purpose of locating candidate events, matching
  /// `euclid3.Ray2.intersect` in the reference implementation.
  pub fn intersect_ray(&self, other: &Ray) -> Option<Point> {
    let denom = self.direction.cross(&other.direction);
    if denom.abs() < 1e-12 {
      return None;
    }
    let diff = other.origin - self.origin;
    let t = diff.cross(&other.direction) / denom;
    Some(self.point_at(t))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn crossing_rays_intersect_regardless_of_sign_of_t() {
    let a = Ray::new(Point::new(0.0, 0.0), Vector::new(1.0, 1.0));
    let b = Ray::new(Point::new(0.0, 2.0), Vector::new(1.0, -1.0));
    let p = a.intersect_ray(&b).unwrap();
    assert!((p.x - 1.0).abs() < 1e-9 && (p.y - 1.0).abs() < 1e-9);
  }

  #[test]
  fn parallel_rays_have_no_intersection() {
    let a = Ray::new(Point::new(0.0, 0.0), Vector::new(1.0, 0.0));
    let b = Ray::new(Point::new(0.0, 1.0), Vector::new(1.0, 0.0));
    assert!(a.intersect_ray(&b).is_none());
  }
}
