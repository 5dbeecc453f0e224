//! Straight skeleton of a simple polygon via Felkel–Obdržálek wavefront
//! propagation.

mod contour;
mod event;
mod lav;
mod original_edge;
mod slav;
mod subtree;
mod vertex;

use log::{debug, trace};

use self::event::{Event, SequenceCounter};
use self::slav::Slav;
use crate::error::SkeletonError;

pub use self::subtree::{merge_sources, Subtree};

/// Tuning knobs for `skeletonize`. `#[non_exhaustive]` so that future
/// knobs (should the non-goals in the crate's scope ever change) don't
/// break callers who construct it with `..Default::default()`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonConfig {
  /// Cross-product sign tolerance used throughout event derivation.
  /// Defaults to `1e-5`. Callers working at a different coordinate scale
  /// may need to widen this.
  pub epsilon: f64,
}

impl Default for SkeletonConfig {
  fn default() -> SkeletonConfig {
    SkeletonConfig { epsilon: 1e-5 }
  }
}

/// Computes the straight skeleton of `outer` (counter-clockwise) with
/// zero or more `holes` (each clockwise), in a plane where the y-axis
/// grows downward.
pub fn skeletonize(
  outer: &[(f64, f64)],
  holes: &[Vec<(f64, f64)>],
) -> Result<Vec<Subtree>, SkeletonError> {
  skeletonize_with_config(outer, holes, SkeletonConfig::default())
}

/// Like [`skeletonize`], with explicit [`SkeletonConfig`].
pub fn skeletonize_with_config(
  outer: &[(f64, f64)],
  holes: &[Vec<(f64, f64)>],
  config: SkeletonConfig,
) -> Result<Vec<Subtree>, SkeletonError> {
  debug!(
    "skeletonize: {} outer vertices, {} holes",
    outer.len(),
    holes.len()
  );

  let mut seq = SequenceCounter::new();
  let (mut slav, mut queue) = Slav::build(outer, holes, config.epsilon, &mut seq)?;

  let mut output = Vec::new();
  while !queue.is_empty() && !slav.is_empty() {
    let event = match queue.pop() {
      Some(event) => event,
      None => break,
    };

    let (subtree, events) = match event {
      Event::Edge {
        distance, point, a, b, ..
      } => {
        if !slav.pool.is_valid(a) || !slav.pool.is_valid(b) {
          trace!("dropping stale edge event at {point:?}");
          continue;
        }
        slav.handle_edge_event(distance, point, a, b, &mut seq)
      }
      Event::Split {
        distance,
        point,
        vertex,
        opposite_edge,
        ..
      } => {
        if !slav.pool.is_valid(vertex) {
          trace!("dropping stale split event at {point:?}");
          continue;
        }
        slav.handle_split_event(distance, point, vertex, opposite_edge, &mut seq)
      }
    };

    queue.push_all(events);
    if let Some(subtree) = subtree {
      output.push(subtree);
    }
  }

  let output = merge_sources(output);
  debug!("skeletonize: produced {} subtrees", output.len());
  Ok(output)
}

/// Ergonomic builder for [`skeletonize_with_config`], so that call sites
/// assembling an outer contour and holes incrementally don't need to
/// build up the `Vec<Vec<(f64, f64)>>` themselves.
#[derive(Debug, Clone, Default)]
pub struct SkeletonBuilder {
  outer: Vec<(f64, f64)>,
  holes: Vec<Vec<(f64, f64)>>,
  config: SkeletonConfig,
}

impl SkeletonBuilder {
  pub fn new() -> SkeletonBuilder {
    SkeletonBuilder::default()
  }

  pub fn outer(mut self, outer: Vec<(f64, f64)>) -> SkeletonBuilder {
    self.outer = outer;
    self
  }

  pub fn hole(mut self, hole: Vec<(f64, f64)>) -> SkeletonBuilder {
    self.holes.push(hole);
    self
  }

  pub fn config(mut self, config: SkeletonConfig) -> SkeletonBuilder {
    self.config = config;
    self
  }

  pub fn build(self) -> Result<Vec<Subtree>, SkeletonError> {
    skeletonize_with_config(&self.outer, &self.holes, self.config)
  }
}
