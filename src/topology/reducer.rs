//! Triangle-inequality edge reduction (topology control).
//!
//! A sweep visits every live vertex `i` in ascending id order. For each
//! unordered pair `{j, k}` of `i`'s neighbors it checks both orientations of
//! the triangle `(i, j, k)`: the link `i`–`j` is dropped when `k` is strictly
//! closer to both `i` and `j` than they are to each other, and symmetrically
//! for `i`–`k`. Evaluating both orientations per unordered pair gives the same
//! removal decisions as scanning all ordered pairs, at half the predicate
//! calls.
//!
//! Removal decisions for `i` are taken from a snapshot of its neighbor set
//! captured before any of `i`'s edges are deleted. Deletions made while
//! visiting earlier vertices are visible to later ones, so the result depends
//! on the visitation order; ascending id order is fixed and covered by tests.

use std::collections::BTreeSet;

use super::geometry::is_shadowed;
use super::graph::UndirGraph;
use super::types::{ReductionReport, ReductionStrategy, VertexId};

/// Reduce `graph` in place according to `strategy`.
pub fn reduce(graph: &mut UndirGraph, strategy: ReductionStrategy) -> ReductionReport {
    let edges_before = graph.edge_count();
    let mut sweeps = 0;
    let mut removed = 0;

    loop {
        let removed_in_sweep = sweep(graph);
        sweeps += 1;
        removed += removed_in_sweep;
        log::debug!("Sweep {} removed {} links", sweeps, removed_in_sweep);

        match strategy {
            ReductionStrategy::SinglePass => break,
            ReductionStrategy::UntilStable if removed_in_sweep == 0 => break,
            ReductionStrategy::UntilStable => {}
        }
    }

    let report = ReductionReport {
        sweeps,
        edges_before,
        edges_after: graph.edge_count(),
        removed,
    };
    log::info!(
        "Reduction ({:?}) finished after {} sweep(s): {} -> {} links ({} removed)",
        strategy,
        report.sweeps,
        report.edges_before,
        report.edges_after,
        report.removed
    );
    report
}

/// Run one reduction sweep over all live vertices and return the number of
/// edges deleted.
pub fn sweep(graph: &mut UndirGraph) -> usize {
    let mut removed = 0;
    for i in graph.vertex_ids() {
        let shadowed = shadowed_neighbors(graph, i);
        for j in shadowed {
            if graph.delete_edge(i, j) {
                log::trace!("Removed link {}-{}", i, j);
                removed += 1;
            }
        }
    }
    removed
}

/// Neighbors of `i` whose direct link is shadowed by another neighbor of `i`.
///
/// Works on a snapshot of the neighbor set; the graph is not modified.
pub fn shadowed_neighbors(graph: &UndirGraph, i: VertexId) -> BTreeSet<VertexId> {
    let mut to_remove = BTreeSet::new();
    let Some(origin) = graph.position(i) else {
        return to_remove;
    };

    let snapshot: Vec<(VertexId, _)> = graph
        .neighbors_as_set(i)
        .into_iter()
        .filter(|&n| n != i)
        .filter_map(|n| graph.position(n).map(|pos| (n, pos)))
        .collect();
    log::debug!("Neighbors of {}: {:?}", i, snapshot.iter().map(|(n, _)| *n).collect::<Vec<_>>());

    for (idx, (j, pj)) in snapshot.iter().enumerate() {
        for (k, pk) in &snapshot[idx + 1..] {
            if is_shadowed(&origin, pj, pk) {
                to_remove.insert(*j);
            }
            if is_shadowed(&origin, pk, pj) {
                to_remove.insert(*k);
            }
        }
    }
    to_remove
}
