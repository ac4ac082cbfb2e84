//! Type definitions shared across the topology pipeline.
//!
//! Contains:
//! - Vertex identifiers and positions
//! - Reduction strategy selection and the per-run reduction report

use serde::{Deserialize, Serialize};

/// Dense vertex identifier, assigned in insertion order starting at 0.
pub type VertexId = u32;

/// Squared proximity threshold used when no configuration overrides it.
///
/// Positions are expressed in area units, so a threshold of 1.0 means two
/// nodes are in range when they are at most one unit apart.
pub const DEFAULT_RADIUS_SQUARED: f64 = 1.0;

/// Simple 2D point in area units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[allow(dead_code)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// How many reduction sweeps to run over the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReductionStrategy {
    /// One sweep in ascending vertex id order.
    #[default]
    SinglePass,
    /// Repeat the sweep until a full sweep removes no edge.
    UntilStable,
}

/// Summary of a reduction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionReport {
    /// Number of sweeps executed (the last one removed nothing for `UntilStable`).
    pub sweeps: usize,
    pub edges_before: usize,
    pub edges_after: usize,
    /// Total edges deleted across all sweeps.
    pub removed: usize,
}
