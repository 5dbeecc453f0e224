//! Straight skeleton of a simple polygon, computed via Felkel–Obdržálek
//! wavefront propagation.
//!
//! ```
//! let outer = [(40.0, 40.0), (40.0, 310.0), (520.0, 310.0), (520.0, 40.0)];
//! let skeleton = straight_skeleton::skeletonize(&outer, &[]).unwrap();
//! assert_eq!(skeleton.len(), 1);
//! ```
//!
//! Holes must be passed as a contour per hole, never a flat vertex list:
//!
//! ```compile_fail
//! let outer = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
//! let flat_holes = [(1.0, 1.0), (1.0, 2.0), (2.0, 2.0)];
//! straight_skeleton::skeletonize(&outer, &flat_holes); // shape mismatch: expected &[Vec<(f64, f64)>]
//! ```

pub mod algorithms;
pub mod data;
mod error;

pub use algorithms::straight_skeleton::{
  skeletonize, skeletonize_with_config, SkeletonBuilder, SkeletonConfig, Subtree,
};
pub use data::Point;
pub use error::{ContourKind, SkeletonError};
