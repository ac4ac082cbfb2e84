//! Proximity graph construction.
//!
//! Draws node positions from an injected coordinate source, adds them as
//! vertices in draw order and connects every pair within the squared radius,
//! producing a unit-disk graph.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};

use super::geometry::in_range;
use super::graph::UndirGraph;
use super::types::Point;

/// Source of uniform coordinates in `[0, bound)`.
///
/// The builder calls `next_coordinate` twice per node, x first, then y.
pub trait CoordinateSource {
    fn next_coordinate(&mut self, bound: f64) -> f64;
}

/// Reproducible coordinates from a seeded `StdRng`.
pub struct SeededCoordinates {
    rng: StdRng,
}

impl SeededCoordinates {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CoordinateSource for SeededCoordinates {
    fn next_coordinate(&mut self, bound: f64) -> f64 {
        if bound <= 0.0 {
            return 0.0;
        }
        Uniform::new(0.0, bound).sample(&mut self.rng)
    }
}

/// Replays a fixed list of coordinates.
///
/// Values at or beyond `bound` are passed through unchanged; once the list is
/// exhausted every further draw returns 0.0.
#[derive(Debug, Clone, Default)]
pub struct FixedCoordinates {
    values: VecDeque<f64>,
}

impl FixedCoordinates {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Flatten points into the x, y draw sequence the builder expects.
    pub fn from_points(points: &[Point]) -> Self {
        Self::new(points.iter().flat_map(|p| [p.x, p.y]))
    }
}

impl CoordinateSource for FixedCoordinates {
    fn next_coordinate(&mut self, _bound: f64) -> f64 {
        self.values.pop_front().unwrap_or(0.0)
    }
}

/// Inputs of the proximity builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityParameters {
    /// Side length of the square service area.
    pub area_size: f64,
    /// Number of nodes to place.
    pub node_count: usize,
    /// Squared distance at or below which two nodes are linked.
    pub radius_squared: f64,
}

/// Build a unit-disk graph of `node_count` nodes drawn from `source`.
///
/// Node `i` gets id `i`. After this call edge `(i, j)` exists if and only if
/// `distance2(i, j) <= radius_squared`.
pub fn build_proximity_graph(params: &ProximityParameters, source: &mut dyn CoordinateSource) -> UndirGraph {
    let mut graph = UndirGraph::new();
    for _ in 0..params.node_count {
        let x = source.next_coordinate(params.area_size);
        let y = source.next_coordinate(params.area_size);
        graph.add_vertex(Point { x, y });
    }
    let added = connect(&mut graph, params.radius_squared);
    log::info!(
        "Placed {} nodes in a {}x{} area, {} links within d²<={}",
        graph.vertex_count(),
        params.area_size,
        params.area_size,
        added,
        params.radius_squared
    );
    graph
}

/// Link every unordered pair of live vertices within `radius_squared`.
///
/// Examines each pair `i < j` exactly once and returns the number of edges
/// added. Expects a graph without edges; existing edges are not deduplicated.
pub fn connect(graph: &mut UndirGraph, radius_squared: f64) -> usize {
    let vertices: Vec<_> = graph.vertices().collect();
    let mut added = 0;
    for (idx, (i, p)) in vertices.iter().enumerate() {
        for (j, q) in &vertices[idx + 1..] {
            if in_range(p, q, radius_squared) {
                if let Err(e) = graph.add_edge(*i, *j) {
                    log::warn!("Skipping link {}-{}: {}", i, j, e);
                    continue;
                }
                added += 1;
            }
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::geometry::distance2;

    fn params(node_count: usize) -> ProximityParameters {
        ProximityParameters {
            area_size: 10.0,
            node_count,
            radius_squared: 1.0,
        }
    }

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn triangle_fixture_yields_complete_triangle() {
        let mut source = FixedCoordinates::from_points(&[p(0.0, 0.0), p(0.0, 0.5), p(0.5, 0.5)]);
        let g = build_proximity_graph(&params(3), &mut source);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert_eq!(g.neighbors(2), &[0, 1]);
    }

    #[test]
    fn edges_match_threshold_exactly() {
        let g = build_proximity_graph(&params(60), &mut SeededCoordinates::new(42));
        assert_eq!(g.vertex_count(), 60);
        let mut expected = 0;
        for i in 0..60 {
            for j in (i + 1)..60 {
                let a = g.position(i).unwrap();
                let b = g.position(j).unwrap();
                let within = distance2(&a, &b) <= 1.0;
                assert_eq!(g.neighbors(i).contains(&j), within, "pair {} {}", i, j);
                if within {
                    expected += 1;
                }
            }
        }
        assert_eq!(g.edge_count(), expected);
        assert!(g.is_symmetric());
    }

    #[test]
    fn boundary_distance_is_linked() {
        let mut source = FixedCoordinates::from_points(&[p(0.0, 0.0), p(1.0, 0.0), p(2.5, 0.0)]);
        let g = build_proximity_graph(&params(3), &mut source);
        assert_eq!(g.neighbors(0), &[1]);
        assert!(g.neighbors(2).is_empty());
    }

    #[test]
    fn seeded_source_is_reproducible_and_bounded() {
        let a = build_proximity_graph(&params(40), &mut SeededCoordinates::new(7));
        let b = build_proximity_graph(&params(40), &mut SeededCoordinates::new(7));
        let pa: Vec<_> = a.vertices().collect();
        let pb: Vec<_> = b.vertices().collect();
        assert_eq!(pa, pb);
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
        for (_, pos) in pa {
            assert!((0.0..10.0).contains(&pos.x));
            assert!((0.0..10.0).contains(&pos.y));
        }
    }

    #[test]
    fn zero_and_one_nodes() {
        let g = build_proximity_graph(&params(0), &mut SeededCoordinates::new(42));
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);

        let g = build_proximity_graph(&params(1), &mut SeededCoordinates::new(42));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn builder_draws_two_coordinates_per_node() {
        struct Counting(usize);
        impl CoordinateSource for Counting {
            fn next_coordinate(&mut self, _bound: f64) -> f64 {
                self.0 += 1;
                self.0 as f64 * 10.0
            }
        }
        let mut source = Counting(0);
        let g = build_proximity_graph(&params(5), &mut source);
        assert_eq!(source.0, 10);
        assert_eq!(g.position(0), Some(p(10.0, 20.0)));
        assert_eq!(g.position(4), Some(p(90.0, 100.0)));
    }
}
