//! Topology control core.
//!
//! This module provides the staged pipeline that turns a set of node
//! positions into a sparse radio backbone:
//! - Proximity graph construction (unit-disk graph)
//! - Triangle-inequality edge reduction
//! - Export of the final graph
//!
//! ## Module Organization
//!
//! - `types`: Core data structures (points, ids, reduction settings)
//! - `geometry`: Squared distance and shadowing predicates
//! - `graph`: Undirected graph store with tombstoned vertex slots
//! - `builder`: Coordinate sources and the proximity builder
//! - `reducer`: The reduction sweep
//! - `export`: DOT and JSON writers
//!
//! The builder hands the graph to the reducer by mutable reference, and the
//! exporter only borrows it; nothing is shared between runs.

pub mod builder;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod reducer;
pub mod types;

pub use builder::{CoordinateSource, FixedCoordinates, ProximityParameters, SeededCoordinates, build_proximity_graph};
pub use export::{ExportFormat, write_graph};
pub use graph::UndirGraph;
pub use reducer::reduce;
pub use types::{Point, ReductionReport, ReductionStrategy, VertexId};
