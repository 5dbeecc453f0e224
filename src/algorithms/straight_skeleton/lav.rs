use super::vertex::{VertexId, VertexPool};

/// A circular doubly-linked list of vertex-pool indices. Owns no vertex
/// data directly — the pool does — only the stable `head` and the
/// maintained `len`.
#[derive(Debug, Clone, Copy)]
pub struct Lav {
  pub head: VertexId,
  pub len: usize,
}

impl Lav {
  pub fn new(head: VertexId, len: usize) -> Lav {
    Lav { head, len }
  }

  /// Vertex ids in traversal order starting at `head`, one full circuit.
  pub fn iter<'a>(&self, pool: &'a VertexPool) -> LavIter<'a> {
    LavIter {
      pool,
      start: self.head,
      current: Some(self.head),
    }
  }
}

pub struct LavIter<'a> {
  pool: &'a VertexPool,
  start: VertexId,
  current: Option<VertexId>,
}

impl<'a> Iterator for LavIter<'a> {
  type Item = VertexId;

  fn next(&mut self) -> Option<VertexId> {
    let current = self.current?;
    let next = self.pool.get(current).next;
    self.current = if next == self.start { None } else { Some(next) };
    Some(current)
  }
}
