//! Undirected graph store holding node positions and symmetric adjacency.
//!
//! Vertices live in a slot vector indexed by their id. Ids come from a
//! monotonically increasing counter (the slot vector length), so deleting a
//! vertex leaves a tombstone (`None`) behind and the id is never handed out
//! again.
//!
//! Lookups on ids that were never assigned or were deleted do not create
//! entries: reads return empty results and deletions are no-ops. Only
//! `add_edge` rejects such ids, since accepting them would leave a half-edge.

use std::collections::BTreeSet;

use super::types::{Point, VertexId};

/// Error returned by graph mutations that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The id was never assigned or the vertex has been deleted.
    UnknownVertex(VertexId),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownVertex(id) => write!(f, "Unknown vertex: {}", id),
        }
    }
}

impl std::error::Error for GraphError {}

/// Live vertex data stored in a slot.
#[derive(Debug, Clone)]
struct VertexSlot {
    position: Point,
    /// Neighbor ids in insertion order.
    neighbors: Vec<VertexId>,
}

/// Undirected graph with positioned vertices.
#[derive(Debug, Clone, Default)]
pub struct UndirGraph {
    slots: Vec<Option<VertexSlot>>,
    live: usize,
}

impl UndirGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex at `position` and return its newly assigned id.
    pub fn add_vertex(&mut self, position: Point) -> VertexId {
        let id = self.slots.len() as VertexId;
        self.slots.push(Some(VertexSlot {
            position,
            neighbors: Vec::new(),
        }));
        self.live += 1;
        id
    }

    /// Connect `u` and `v`.
    ///
    /// Appends `v` to `u`'s neighbors and `u` to `v`'s neighbors. There is no
    /// self-loop or duplicate check; callers must add each pair at most once.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        if !self.contains(u) {
            return Err(GraphError::UnknownVertex(u));
        }
        if !self.contains(v) {
            return Err(GraphError::UnknownVertex(v));
        }
        if let Some(slot) = self.slot_mut(u) {
            slot.neighbors.push(v);
        }
        if let Some(slot) = self.slot_mut(v) {
            slot.neighbors.push(u);
        }
        Ok(())
    }

    /// Remove one occurrence of the edge `u`–`v` in both directions.
    ///
    /// Returns `true` if an edge was removed. Absent edges are a no-op.
    pub fn delete_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let forward = self.slot_mut(u).is_some_and(|slot| remove_first(&mut slot.neighbors, v));
        let backward = self.slot_mut(v).is_some_and(|slot| remove_first(&mut slot.neighbors, u));
        forward || backward
    }

    /// Remove vertex `id` and every edge touching it.
    ///
    /// Scans all remaining neighbor lists and drops the first occurrence of
    /// `id` from each. The slot becomes a tombstone. Returns the removed
    /// position, or `None` if the id was not live.
    #[allow(dead_code)]
    pub fn delete_vertex(&mut self, id: VertexId) -> Option<Point> {
        let removed = self.slots.get_mut(id as usize)?.take()?;
        self.live -= 1;
        for slot in self.slots.iter_mut().flatten() {
            remove_first(&mut slot.neighbors, id);
        }
        Some(removed.position)
    }

    /// Neighbors of `id` in insertion order, empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.slot(id).map(|slot| slot.neighbors.as_slice()).unwrap_or(&[])
    }

    /// Duplicate-free neighbors of `id` in ascending order.
    pub fn neighbors_as_set(&self, id: VertexId) -> BTreeSet<VertexId> {
        self.neighbors(id).iter().copied().collect()
    }

    pub fn position(&self, id: VertexId) -> Option<Point> {
        self.slot(id).map(|slot| slot.position)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.live
    }

    /// Number of ids ever assigned, tombstones included.
    #[allow(dead_code)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of undirected edges, computed as half the total degree.
    pub fn edge_count(&self) -> usize {
        self.total_degree() / 2
    }

    /// Sum of all neighbor list lengths.
    pub fn total_degree(&self) -> usize {
        self.slots.iter().flatten().map(|slot| slot.neighbors.len()).sum()
    }

    /// Live vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|s| (idx as VertexId, s.position)))
    }

    /// Live vertex ids in ascending order.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().map(|(id, _)| id).collect()
    }

    /// Each undirected edge once as `(u, v)` with `u < v`.
    ///
    /// Ordered by `u`, then by `u`'s neighbor insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices()
            .flat_map(move |(u, _)| self.neighbors(u).iter().filter(move |&&v| v > u).map(move |&v| (u, v)))
    }

    /// True if every neighbor relation is mirrored with equal multiplicity.
    pub fn is_symmetric(&self) -> bool {
        self.vertices().all(|(u, _)| {
            self.neighbors(u).iter().all(|&v| {
                let forward = self.neighbors(u).iter().filter(|&&x| x == v).count();
                let backward = self.neighbors(v).iter().filter(|&&x| x == u).count();
                forward == backward
            })
        })
    }

    fn slot(&self, id: VertexId) -> Option<&VertexSlot> {
        self.slots.get(id as usize).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut VertexSlot> {
        self.slots.get_mut(id as usize).and_then(Option::as_mut)
    }
}

/// Remove the first occurrence of `value`, preserving the order of the rest.
fn remove_first(list: &mut Vec<VertexId>, value: VertexId) -> bool {
    match list.iter().position(|&x| x == value) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// 4x4 lattice with a few hand-picked edges.
    fn lattice() -> UndirGraph {
        let mut g = UndirGraph::new();
        for i in 0..4 {
            for j in 0..4 {
                g.add_vertex(p(i as f64, j as f64));
            }
        }
        g.add_edge(0, 10).unwrap();
        g.add_edge(5, 0).unwrap();
        g.add_edge(2, 4).unwrap();
        g
    }

    #[test]
    fn add_vertex_assigns_dense_ids() {
        let mut g = UndirGraph::new();
        assert_eq!(g.add_vertex(p(0.0, 0.0)), 0);
        assert_eq!(g.add_vertex(p(1.0, 0.0)), 1);
        assert_eq!(g.add_vertex(p(2.0, 0.0)), 2);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(1).is_empty());
        assert_eq!(g.position(2), Some(p(2.0, 0.0)));
    }

    #[test]
    fn add_edge_is_symmetric_and_ordered() {
        let g = lattice();
        assert_eq!(g.vertex_count(), 16);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0), &[10, 5]);
        assert_eq!(g.neighbors(10), &[0]);
        assert_eq!(g.neighbors(5), &[0]);
        assert_eq!(g.neighbors_as_set(0).into_iter().collect::<Vec<_>>(), vec![5, 10]);
        assert!(g.is_symmetric());
        assert_eq!(g.edge_count(), g.total_degree() / 2);
    }

    #[test]
    fn add_edge_rejects_unknown_vertices() {
        let mut g = lattice();
        assert_eq!(g.add_edge(0, 99), Err(GraphError::UnknownVertex(99)));
        assert_eq!(g.add_edge(42, 1), Err(GraphError::UnknownVertex(42)));
        assert_eq!(g.neighbors(0), &[10, 5]);
        assert!(g.is_symmetric());
    }

    #[test]
    fn delete_edge_twice_removes_once() {
        let mut g = lattice();
        assert!(g.delete_edge(0, 10));
        assert_eq!(g.edge_count(), 2);
        assert!(!g.delete_edge(0, 10));
        assert!(!g.delete_edge(10, 0));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0), &[5]);
        assert!(g.neighbors(10).is_empty());
        assert!(g.is_symmetric());
    }

    #[test]
    fn delete_edge_on_non_adjacent_pair_is_noop() {
        let mut g = lattice();
        assert!(!g.delete_edge(1, 3));
        assert!(!g.delete_edge(7, 123));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn delete_vertex_removes_all_references() {
        let mut g = lattice();
        assert_eq!(g.delete_vertex(0), Some(p(0.0, 0.0)));
        assert_eq!(g.vertex_count(), 15);
        assert_eq!(g.position(0), None);
        assert!(g.neighbors(0).is_empty());
        assert!(g.neighbors(10).is_empty());
        assert!(g.neighbors(5).is_empty());
        assert_eq!(g.edge_count(), 1);
        assert!(g.is_symmetric());
        assert!(g.vertices().all(|(id, _)| id != 0));

        g.delete_vertex(2);
        assert!(g.neighbors(4).is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.delete_vertex(2), None);
        assert_eq!(g.vertex_count(), 14);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut g = lattice();
        g.delete_vertex(10);
        let id = g.add_vertex(p(9.0, 9.0));
        assert_eq!(id, 16);
        assert_eq!(g.capacity(), 17);
        assert_eq!(g.vertex_count(), 16);
        assert!(!g.contains(10));
        assert_eq!(g.add_edge(id, 10), Err(GraphError::UnknownVertex(10)));
    }

    #[test]
    fn queries_on_unknown_ids_do_not_create_vertices() {
        let g = lattice();
        assert!(g.neighbors(500).is_empty());
        assert!(g.neighbors_as_set(500).is_empty());
        assert_eq!(g.position(500), None);
        assert_eq!(g.vertex_count(), 16);
        assert_eq!(g.capacity(), 16);
    }

    #[test]
    fn edges_lists_each_pair_once() {
        let g = lattice();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 10), (0, 5), (2, 4)]);
    }

    #[test]
    fn empty_graph_has_no_vertices_or_edges() {
        let g = UndirGraph::new();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges().count(), 0);
        assert!(g.is_symmetric());
    }
}
