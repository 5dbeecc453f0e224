use crate::data::Point;

/// One emitted skeleton node: the `source` point produced when an event
/// fired, the wavefront `height` (time) at which it fired, and the
/// `sinks` it connects to — vertices (or dissolved-LAV heads) consumed
/// into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtree {
  pub source: Point,
  pub height: f64,
  pub sinks: Vec<Point>,
}

impl Subtree {
  pub fn new(source: Point, height: f64, sinks: Vec<Point>) -> Subtree {
    Subtree {
      source,
      height,
      sinks,
    }
  }
}

/// Coalesces subtrees whose `source` points compare exactly equal: their
/// `sinks` are unioned preserving order with duplicates removed, and the
/// later subtree is dropped. Height of the survivor is unchanged.
pub fn merge_sources(subtrees: Vec<Subtree>) -> Vec<Subtree> {
  let mut merged: Vec<Subtree> = Vec::with_capacity(subtrees.len());
  for subtree in subtrees {
    match merged.iter_mut().find(|m| m.source == subtree.source) {
      Some(existing) => {
        for sink in subtree.sinks {
          if !existing.sinks.contains(&sink) {
            existing.sinks.push(sink);
          }
        }
      }
      None => merged.push(subtree),
    }
  }
  merged
}
