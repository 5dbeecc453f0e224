use log::trace;

use super::contour::{normalize_contour, signed_area_2x};
use super::event::{Event, EventQueue, SequenceCounter};
use super::lav::Lav;
use super::original_edge::OriginalEdge;
use super::subtree::Subtree;
use super::vertex::{
  bisector_from_creator_vectors, bisector_from_edges, next_event, EdgeId, LavId, Vertex, VertexId,
  VertexPool,
};
use crate::data::{LineSegment, Point};
use crate::error::{ContourKind, SkeletonError};

/// Owns the vertex-pool arena, the set of active LAVs, and the immutable
/// original-edge array for one `skeletonize` call.
pub struct Slav {
  pub pool: VertexPool,
  pub lavs: Vec<Option<Lav>>,
  pub edges: Vec<OriginalEdge>,
  pub epsilon: f64,
}

impl Slav {
  /// Validates and normalizes `outer` and `holes`, builds the vertex
  /// pool and initial LAVs, and seeds every vertex's first event.
  pub fn build(
    outer: &[(f64, f64)],
    holes: &[Vec<(f64, f64)>],
    epsilon: f64,
    seq: &mut SequenceCounter,
  ) -> Result<(Slav, EventQueue), SkeletonError> {
    let outer_pts = normalize_contour(outer);
    if outer_pts.len() < 3 {
      return Err(SkeletonError::InsufficientVertices {
        contour: ContourKind::Outer,
      });
    }
    // The algorithm is specified in a y-down frame, where a CCW outer
    // contour is CW by the ordinary (y-up) shoelace formula computed
    // here — i.e. a spec-valid outer contour has a *negative*
    // `signed_area_2x`.
    if signed_area_2x(&outer_pts) > 0.0 {
      return Err(SkeletonError::ClockWiseViolation {
        contour: ContourKind::Outer,
      });
    }

    let mut hole_pts = Vec::with_capacity(holes.len());
    for (i, hole) in holes.iter().enumerate() {
      let pts = normalize_contour(hole);
      if pts.len() < 3 {
        return Err(SkeletonError::InsufficientVertices {
          contour: ContourKind::Hole(i),
        });
      }
      // A hole must be CW in the spec's y-down frame, i.e. a spec-valid
      // hole has a *positive* `signed_area_2x` here.
      if signed_area_2x(&pts) < 0.0 {
        return Err(SkeletonError::CounterClockWiseViolation {
          contour: ContourKind::Hole(i),
        });
      }
      hole_pts.push(pts);
    }

    let mut contours = vec![outer_pts];
    contours.extend(hole_pts);

    let mut pool = VertexPool::new();
    let mut lavs: Vec<Option<Lav>> = Vec::new();
    let mut edges: Vec<OriginalEdge> = Vec::new();

    for contour in &contours {
      let n = contour.len();
      let base = edges.len();
      for i in 0..n {
        let segment = LineSegment::new(contour[i], contour[(i + 1) % n]);
        edges.push(OriginalEdge {
          edge: segment,
          // Filled in once this contour's vertex bisectors are known.
          bisector_left: crate::data::Ray::new(contour[i], crate::data::Vector::new(0.0, 0.0)),
          bisector_right: crate::data::Ray::new(contour[i], crate::data::Vector::new(0.0, 0.0)),
        });
      }

      let lav_id = lavs.len();
      lavs.push(None);

      let mut vids = Vec::with_capacity(n);
      for &point in contour {
        vids.push(pool.alloc(Vertex::new(
          point,
          0,
          0,
          0,
          0,
          lav_id,
          false,
          crate::data::Ray::new(point, crate::data::Vector::new(0.0, 0.0)),
        )));
      }

      for i in 0..n {
        let vid = vids[i];
        let prev_vid = vids[(i + n - 1) % n];
        let next_vid = vids[(i + 1) % n];
        let edge_left_id = base + (i + n - 1) % n;
        let edge_right_id = base + i;
        let (is_reflex, bisector) =
          bisector_from_edges(contour[i], &edges[edge_left_id], &edges[edge_right_id]);
        let v = pool.get_mut(vid);
        v.edge_left = edge_left_id;
        v.edge_right = edge_right_id;
        v.prev = prev_vid;
        v.next = next_vid;
        v.is_reflex = is_reflex;
        v.bisector = bisector;
      }

      for i in 0..n {
        edges[base + i].bisector_left = pool.get(vids[i]).bisector;
        edges[base + i].bisector_right = pool.get(vids[(i + 1) % n]).bisector;
      }

      lavs[lav_id] = Some(Lav::new(vids[0], n));
    }

    let slav = Slav {
      pool,
      lavs,
      edges,
      epsilon,
    };

    let mut queue = EventQueue::new();
    for lav in slav.lavs.iter().flatten() {
      for vid in lav.iter(&slav.pool) {
        if let Some(event) = next_event(&slav.pool, &slav.edges, vid, slav.epsilon, seq) {
          queue.push(event);
        }
      }
    }

    Ok((slav, queue))
  }

  pub fn is_empty(&self) -> bool {
    self.lavs.iter().all(Option::is_none)
  }

  fn rebuild_lav(&mut self, start: VertexId, new_lav_id: LavId) -> Lav {
    let mut count = 0;
    let mut cur = start;
    loop {
      self.pool.get_mut(cur).lav = Some(new_lav_id);
      count += 1;
      cur = self.pool.get(cur).next;
      if cur == start {
        break;
      }
    }
    Lav::new(start, count)
  }

  /// Invalidates every member of a too-short new LAV and returns the
  /// sink point it contributes, per the reference implementation's
  /// `lav.head.next` convention.
  fn dissolve(&mut self, lav_id: LavId, lav: &Lav) -> Point {
    let sink_point = self.pool.get(self.pool.get(lav.head).next).point;
    let ids: Vec<VertexId> = lav.iter(&self.pool).collect();
    for id in ids {
      self
        .pool
        .invalidate(id, lav_id)
        .expect("dissolved lav only contains vertices it owns");
    }
    sink_point
  }

  /// Handles one edge-collapse event. Precondition: `a` and `b` are
  /// still valid (checked by the caller's main loop).
  pub fn handle_edge_event(
    &mut self,
    distance: f64,
    point: Point,
    a_id: VertexId,
    b_id: VertexId,
    seq: &mut SequenceCounter,
  ) -> (Option<Subtree>, Vec<Event>) {
    let lav_id = self.pool.get(a_id).lav.expect("valid vertex has a lav");
    let a_prev = self.pool.get(a_id).prev;
    let b_next = self.pool.get(b_id).next;

    if a_prev == b_next {
      trace!("edge event at {point:?}: degenerate collapse of lav {lav_id}");
      let lav = self.lavs[lav_id].expect("lav id refers to a live lav");
      let sinks: Vec<Point> = lav.iter(&self.pool).map(|id| self.pool.get(id).point).collect();
      let ids: Vec<VertexId> = lav.iter(&self.pool).collect();
      for id in ids {
        self
          .pool
          .invalidate(id, lav_id)
          .expect("degenerate lav only contains vertices it owns");
      }
      self.lavs[lav_id] = None;
      return (Some(Subtree::new(point, distance, sinks)), Vec::new());
    }

    trace!("edge event at {point:?}: unify {a_id} and {b_id}");
    let sinks = vec![self.pool.get(a_id).point, self.pool.get(b_id).point];
    let r_id = self.unify(lav_id, a_id, b_id, point);
    let events = next_event(&self.pool, &self.edges, r_id, self.epsilon, seq)
      .into_iter()
      .collect();
    (Some(Subtree::new(point, distance, sinks)), events)
  }

  /// Replaces adjacent vertices `a`, `b = a.next` with one vertex at
  /// `point`, inheriting `a`'s and `b`'s bisector directions rather than
  /// recomputing from incident edges (§4.2).
  fn unify(&mut self, lav_id: LavId, a_id: VertexId, b_id: VertexId, point: Point) -> VertexId {
    let a = *self.pool.get(a_id);
    let b = *self.pool.get(b_id);

    let v0 = b.bisector.direction.normalize();
    let v1 = a.bisector.direction.normalize();
    let (is_reflex, bisector) = bisector_from_creator_vectors(point, v0, v1);

    let r_id = self.pool.alloc(Vertex::new(
      point,
      a.edge_left,
      b.edge_right,
      a.prev,
      b.next,
      lav_id,
      is_reflex,
      bisector,
    ));

    let mut lav = self.lavs[lav_id].expect("lav id refers to a live lav");
    if lav.head == a_id || lav.head == b_id {
      lav.head = r_id;
    }
    self.pool.get_mut(a.prev).next = r_id;
    self.pool.get_mut(b.next).prev = r_id;

    self
      .pool
      .invalidate(a_id, lav_id)
      .expect("a_id belongs to lav_id before unify");
    self
      .pool
      .invalidate(b_id, lav_id)
      .expect("b_id belongs to lav_id before unify");

    lav.len -= 1;
    self.lavs[lav_id] = Some(lav);

    r_id
  }

  /// Handles one split event. Precondition: `vertex_id` is still valid
  /// (checked by the caller's main loop).
  pub fn handle_split_event(
    &mut self,
    distance: f64,
    point: Point,
    vertex_id: VertexId,
    opposite_edge: EdgeId,
    seq: &mut SequenceCounter,
  ) -> (Option<Subtree>, Vec<Event>) {
    let mut found: Option<(VertexId, VertexId)> = None;
    'scan: for lav_idx in 0..self.lavs.len() {
      let Some(lav) = self.lavs[lav_idx] else { continue };
      for v in lav.iter(&self.pool) {
        let vert = self.pool.get(v);
        let (x_id, y_id) = if vert.edge_left == opposite_edge {
          (v, vert.prev)
        } else if vert.edge_right == opposite_edge {
          (vert.next, v)
        } else {
          continue;
        };
        let x = self.pool.get(x_id);
        let y = self.pool.get(y_id);
        let xleft = y
          .bisector
          .direction
          .normalize()
          .cross(&(point - y.point).normalize())
          >= -self.epsilon;
        let xright = x
          .bisector
          .direction
          .normalize()
          .cross(&(point - x.point).normalize())
          <= self.epsilon;
        if xleft && xright {
          found = Some((x_id, y_id));
          break 'scan;
        }
      }
    }

    let (x_id, y_id) = match found {
      Some(pair) => pair,
      None => {
        trace!("split event at {point:?}: no eligible (x, y) pair, dropping");
        return (None, Vec::new());
      }
    };

    let v = *self.pool.get(vertex_id);
    let v_prev = v.prev;
    let v_next = v.next;
    let v_lav = v.lav.expect("valid vertex has a lav");

    let (is_reflex_1, bisector_1) =
      bisector_from_edges(point, &self.edges[v.edge_left], &self.edges[opposite_edge]);
    let v1_id = self.pool.alloc(Vertex::new(
      point,
      v.edge_left,
      opposite_edge,
      v_prev,
      x_id,
      v_lav,
      is_reflex_1,
      bisector_1,
    ));

    let (is_reflex_2, bisector_2) =
      bisector_from_edges(point, &self.edges[opposite_edge], &self.edges[v.edge_right]);
    let v2_id = self.pool.alloc(Vertex::new(
      point,
      opposite_edge,
      v.edge_right,
      y_id,
      v_next,
      v_lav,
      is_reflex_2,
      bisector_2,
    ));

    self.pool.get_mut(v_prev).next = v1_id;
    self.pool.get_mut(x_id).prev = v1_id;
    self.pool.get_mut(y_id).next = v2_id;
    self.pool.get_mut(v_next).prev = v2_id;

    let x_lav = self.pool.get(x_id).lav.expect("valid vertex has a lav");

    self.lavs[v_lav] = None;
    let mut sinks = vec![self.pool.get(vertex_id).point];
    let mut new_roots = Vec::new();

    if v_lav == x_lav {
      trace!("split event at {point:?}: splits lav {v_lav} in two");
      new_roots.push(v1_id);
      new_roots.push(v2_id);
    } else {
      trace!("split event at {point:?}: merges lavs {v_lav} and {x_lav}");
      self.lavs[x_lav] = None;
      new_roots.push(v1_id);
    }

    let mut new_events = Vec::new();
    for root in new_roots {
      let new_lav_id = self.lavs.len();
      let new_lav = self.rebuild_lav(root, new_lav_id);
      if new_lav.len > 2 {
        self.lavs.push(Some(new_lav));
        if let Some(event) = next_event(&self.pool, &self.edges, new_lav.head, self.epsilon, seq) {
          new_events.push(event);
        }
      } else {
        self.lavs.push(None);
        sinks.push(self.dissolve(new_lav_id, &new_lav));
      }
    }

    self
      .pool
      .invalidate(vertex_id, v_lav)
      .expect("vertex_id belongs to v_lav before the split");

    (Some(Subtree::new(point, distance, sinks)), new_events)
  }
}
