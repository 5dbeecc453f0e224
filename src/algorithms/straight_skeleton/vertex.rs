use super::event::{Event, SequenceCounter};
use super::original_edge::OriginalEdge;
use crate::data::{Line, Point, Ray, Vector};
use crate::error::SkeletonError;

pub type VertexId = usize;
pub type LavId = usize;
pub type EdgeId = usize;

/// A vertex of the wavefront at the moment it was created. Stored in a
/// `VertexPool` arena; `prev`/`next`/`lav` are indices rather than
/// pointers, which is how this crate avoids the cyclic-reference hazard
/// inherent to a doubly-linked circular list.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
  pub point: Point,
  pub edge_left: EdgeId,
  pub edge_right: EdgeId,
  pub prev: VertexId,
  pub next: VertexId,
  pub lav: Option<LavId>,
  pub is_reflex: bool,
  pub bisector: Ray,
  valid: bool,
}

/// Arena of vertices, addressed by stable `usize` indices. Owned by the
/// `Slav` for the lifetime of one `skeletonize` call.
#[derive(Debug, Default)]
pub struct VertexPool {
  slots: Vec<Vertex>,
}

impl VertexPool {
  pub fn new() -> VertexPool {
    VertexPool { slots: Vec::new() }
  }

  pub fn alloc(&mut self, vertex: Vertex) -> VertexId {
    self.slots.push(vertex);
    self.slots.len() - 1
  }

  pub fn get(&self, id: VertexId) -> &Vertex {
    &self.slots[id]
  }

  pub fn get_mut(&mut self, id: VertexId) -> &mut Vertex {
    &mut self.slots[id]
  }

  pub fn is_valid(&self, id: VertexId) -> bool {
    self.slots[id].valid
  }

  /// Marks `id` invalid, freeing it from `owner`. Mirrors the reference
  /// implementation's `_LAV.invalidate`, which asserts `vertex.lav is
  /// self` before unlinking — here that assertion is a `debug_assert!`
  /// plus an `InvalidLav` return so the check survives in release
  /// builds too. Provably unreachable from this crate's own call sites,
  /// all of which pass the vertex's actual owning `LavId`.
  pub fn invalidate(&mut self, id: VertexId, owner: LavId) -> Result<(), SkeletonError> {
    let belongs = self.slots[id].lav == Some(owner);
    debug_assert!(
      belongs,
      "tried to invalidate vertex {id} which is not owned by lav {owner}"
    );
    if !belongs {
      return Err(SkeletonError::InvalidLav);
    }
    self.slots[id].valid = false;
    self.slots[id].lav = None;
    Ok(())
  }
}

/// Reflex classification plus bisector ray, derived from a pair of
/// "creator vectors" pointing back along the incoming edge and forward
/// along the outgoing edge (or, for a vertex produced by `unify`, the
/// inherited bisector directions of the two vertices it replaces).
pub fn bisector_from_creator_vectors(point: Point, v0: Vector, v1: Vector) -> (bool, Ray) {
  let is_reflex = v0.cross(&v1) < 0.0;
  let mut direction = v0 + v1;
  if is_reflex {
    direction = -direction;
  }
  (is_reflex, Ray::new(point, direction))
}

/// Bisector construction for a vertex still carrying its original two
/// incident edges (§4.2).
pub fn bisector_from_edges(point: Point, edge_left: &OriginalEdge, edge_right: &OriginalEdge) -> (bool, Ray) {
  let d_in = -edge_left.edge.direction().normalize();
  let d_out = edge_right.edge.direction().normalize();
  bisector_from_creator_vectors(point, d_in, d_out)
}

impl Vertex {
  pub fn new(
    point: Point,
    edge_left: EdgeId,
    edge_right: EdgeId,
    prev: VertexId,
    next: VertexId,
    lav: LavId,
    is_reflex: bool,
    bisector: Ray,
  ) -> Vertex {
    Vertex {
      point,
      edge_left,
      edge_right,
      prev,
      next,
      lav: Some(lav),
      is_reflex,
      bisector,
      valid: true,
    }
  }
}

/// The smallest Euclidean-distance-from-`v.point` candidate wins,
/// deliberately a different metric than the one the event queue orders
/// events by (see the design note on the two distance notions).
struct BestCandidate {
  selection_distance: f64,
  event: Event,
}

fn consider(best: &mut Option<BestCandidate>, selection_distance: f64, event: Event) {
  let better = match best {
    None => true,
    Some(b) => selection_distance < b.selection_distance,
  };
  if better {
    *best = Some(BestCandidate {
      selection_distance,
      event,
    });
  }
}

/// Computes the smallest-distance candidate event for vertex `vid`,
/// considering edge-event candidates against its LAV neighbors and (for
/// reflex vertices) split-event candidates against every original edge
/// not incident to it (§4.3.1).
pub fn next_event(
  pool: &VertexPool,
  edges: &[OriginalEdge],
  vid: VertexId,
  epsilon: f64,
  seq: &mut SequenceCounter,
) -> Option<Event> {
  let v = pool.get(vid);
  let mut best: Option<BestCandidate> = None;

  let prev = pool.get(v.prev);
  if let Some(p) = v.bisector.intersect_ray(&prev.bisector) {
    let distance = edges[v.edge_left].edge.distance_to_point(&p);
    let event = Event::Edge {
      distance,
      point: p,
      a: v.prev,
      b: vid,
      seq: seq.next(),
    };
    consider(&mut best, v.point.distance_to(&p), event);
  }

  let next = pool.get(v.next);
  if let Some(p) = v.bisector.intersect_ray(&next.bisector) {
    let distance = edges[v.edge_right].edge.distance_to_point(&p);
    let event = Event::Edge {
      distance,
      point: p,
      a: vid,
      b: v.next,
      seq: seq.next(),
    };
    consider(&mut best, v.point.distance_to(&p), event);
  }

  if v.is_reflex {
    for (ei, _) in edges.iter().enumerate() {
      if ei == v.edge_left || ei == v.edge_right {
        continue;
      }
      if let Some((point, distance)) = split_candidate(pool, edges, vid, ei, epsilon) {
        let event = Event::Split {
          distance,
          point,
          vertex: vid,
          opposite_edge: ei,
          seq: seq.next(),
        };
        consider(&mut best, v.point.distance_to(&point), event);
      }
    }
  }

  best.map(|b| b.event)
}

/// A single candidate split-event intersection point for reflex vertex
/// `vid` against `opposite_edge`, and its queue-ordering distance.
fn split_candidate(
  pool: &VertexPool,
  edges: &[OriginalEdge],
  vid: VertexId,
  opposite_edge: EdgeId,
  epsilon: f64,
) -> Option<(Point, f64)> {
  let v = pool.get(vid);
  let e = &edges[opposite_edge];
  let edge_left = &edges[v.edge_left].edge;
  let edge_right = &edges[v.edge_right].edge;
  let e_dir = e.edge.direction().normalize();

  let dot_left = edge_left.direction().normalize().dot(&e_dir).abs();
  let dot_right = edge_right.direction().normalize().dot(&e_dir).abs();
  let self_edge = if dot_left < dot_right { edge_left } else { edge_right };

  let self_line = Line::through(self_edge.start(), self_edge.end());
  let e_line = Line::through(e.edge.start(), e.edge.end());
  let i = self_line.intersect_line(&e_line)?;
  if i.approx_eq(&v.point) {
    return None;
  }

  let linvec = (v.point - i).normalize();
  let mut edvec = e_dir;
  if linvec.dot(&edvec) < 0.0 {
    edvec = -edvec;
  }
  let bisecvec = edvec + linvec;
  if bisecvec.magnitude() == 0.0 {
    return None;
  }

  let aux_line = Line::new(i, bisecvec);
  let bisector_line = Line::new(v.bisector.origin, v.bisector.direction);
  let b = aux_line.intersect_line(&bisector_line)?;

  let t1 = e
    .bisector_left
    .direction
    .normalize()
    .cross(&(b - e.bisector_left.origin).normalize());
  if !(t1 > -epsilon) {
    return None;
  }
  let t2 = e
    .bisector_right
    .direction
    .normalize()
    .cross(&(b - e.bisector_right.origin).normalize());
  if !(t2 < epsilon) {
    return None;
  }
  let t3 = e_dir.cross(&(b - e.edge.start()).normalize());
  if !(t3 < epsilon) {
    return None;
  }

  let distance = e.edge.distance_to_point(&b);
  Some((b, distance))
}
