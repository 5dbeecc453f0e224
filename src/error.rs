/// Which contour an error pertains to, for error messages that need to
/// distinguish the outer boundary from one of the holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourKind {
  Outer,
  Hole(usize),
}

impl std::fmt::Display for ContourKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContourKind::Outer => write!(f, "outer contour"),
      ContourKind::Hole(i) => write!(f, "hole #{i}"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SkeletonError {
  /// The contour is empty, or has fewer than three distinct vertices once
  /// consecutive duplicates and collinear-forward vertices are stripped.
  InsufficientVertices { contour: ContourKind },
  /// The outer contour is wound clockwise; it is required to be CCW.
  ClockWiseViolation { contour: ContourKind },
  /// A hole is wound counter-clockwise; it is required to be CW.
  CounterClockWiseViolation { contour: ContourKind },
  /// A vertex was asked to invalidate itself out of a LAV it does not
  /// belong to. Provably unreachable from safe call sites; also trips a
  /// `debug_assert!` in debug builds.
  InvalidLav,
}

impl std::fmt::Display for SkeletonError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SkeletonError::InsufficientVertices { contour } => {
        write!(f, "{contour} has fewer than three distinct vertices")
      }
      SkeletonError::ClockWiseViolation { contour } => {
        write!(f, "{contour} must be wound counter-clockwise")
      }
      SkeletonError::CounterClockWiseViolation { contour } => {
        write!(f, "{contour} must be wound clockwise")
      }
      SkeletonError::InvalidLav => {
        write!(f, "vertex does not belong to the LAV asked to invalidate it")
      }
    }
  }
}

impl std::error::Error for SkeletonError {}
