//! Read-only serialization of a finished graph.
//!
//! Two formats are supported:
//! - `Dot`: Graphviz markup with fixed node positions (`neato -n` friendly)
//! - `Json`: a snapshot whose `nodes` array is a valid scene file

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::graph::UndirGraph;
use super::types::{Point, VertexId};

/// Output format selected in the run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Dot,
    Json,
}

#[derive(Debug, Serialize)]
struct SnapshotNode {
    node_id: VertexId,
    position: Point,
}

#[derive(Debug, Serialize)]
struct GraphSnapshot {
    nodes: Vec<SnapshotNode>,
    edges: Vec<[VertexId; 2]>,
}

/// Write `graph` to `out` in the requested format.
pub fn write_graph<W: Write>(graph: &UndirGraph, format: ExportFormat, out: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Dot => write_dot(graph, out),
        ExportFormat::Json => write_json(graph, out),
    }
}

/// Emit Graphviz markup: one node statement per vertex carrying its pinned
/// position, a blank line, then one `a -- b` statement per undirected edge.
///
/// Edges are listed from the smaller endpoint only, so each appears once.
pub fn write_dot<W: Write>(graph: &UndirGraph, out: &mut W) -> io::Result<()> {
    writeln!(out, "graph G {{")?;
    writeln!(out, "node [shape=circle, width=0.05, height=0.05];")?;
    for (id, pos) in graph.vertices() {
        writeln!(out, "{} [pos = \"{},{}!\" label = \"\"];", id, pos.x, pos.y)?;
    }
    writeln!(out)?;
    for (u, v) in graph.edges() {
        writeln!(out, "{} -- {}", u, v)?;
    }
    writeln!(out, "}}")
}

/// Emit a pretty-printed JSON snapshot of nodes and edges.
pub fn write_json<W: Write>(graph: &UndirGraph, out: &mut W) -> io::Result<()> {
    let snapshot = GraphSnapshot {
        nodes: graph
            .vertices()
            .map(|(node_id, position)| SnapshotNode { node_id, position })
            .collect(),
        edges: graph.edges().map(|(u, v)| [u, v]).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &snapshot)?;
    writeln!(out)
}
