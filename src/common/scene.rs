//! Scene loading, parsing, and validation logic.
//!
//! A scene pins node positions explicitly instead of drawing them from the
//! seeded coordinate source. The JSON `nodes` array has the same shape as the
//! one written by the JSON exporter, so a previous run's output can be fed
//! back in.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::topology::{Point, VertexId};

/// Error type for scene loading failures.
#[derive(Debug)]
pub enum SceneLoadError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            SceneLoadError::ParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
            SceneLoadError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Node entry with its pinned position.
#[derive(Debug, Deserialize, Clone)]
pub struct Node {
    pub node_id: VertexId,
    pub position: Point,
}

/// Root structure representing the entire scene.
#[derive(Debug, Deserialize)]
pub struct Scene {
    /// All nodes present in the scene, in id order.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// Node positions in id order.
    pub fn positions(&self) -> Vec<Point> {
        self.nodes.iter().map(|node| node.position).collect()
    }
}

/// Load, parse and validate a scene from a file.
pub fn load_scene(path: &Path) -> Result<Scene, SceneLoadError> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
        .map_err(|e| SceneLoadError::FileReadError(e.to_string()))?;
    parse_scene(&data)
}

/// Parse and validate a scene from JSON text.
pub fn parse_scene(data: &str) -> Result<Scene, SceneLoadError> {
    let scene: Scene = serde_json::from_str(data)
        .context("Invalid JSON format")
        .map_err(|e| SceneLoadError::ParseError(format!("{:#}", e)))?;

    validate_scene(&scene).map_err(SceneLoadError::ValidationError)?;
    Ok(scene)
}

/// Validate scene configuration.
///
/// Node ids must be `0..n` in file order, matching the ids the graph store
/// assigns, and every coordinate must be finite.
pub fn validate_scene(scene: &Scene) -> Result<(), String> {
    const MAX_NODES: usize = 100_000;

    if scene.nodes.len() > MAX_NODES {
        return Err(format!("Node count {} exceeds maximum of {}", scene.nodes.len(), MAX_NODES));
    }

    for (idx, node) in scene.nodes.iter().enumerate() {
        if node.node_id as usize != idx {
            return Err(format!(
                "Node at index {} has node_id {}, expected ids 0..{} in order",
                idx,
                node.node_id,
                scene.nodes.len()
            ));
        }
        if !node.position.is_finite() {
            return Err(format!(
                "Node {} position ({}, {}) is not finite",
                node.node_id, node.position.x, node.position.y
            ));
        }
    }

    Ok(())
}
