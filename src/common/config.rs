//! Run configuration loaded from a TOML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::topology::types::DEFAULT_RADIUS_SQUARED;
use crate::topology::{ExportFormat, ProximityParameters, ReductionStrategy};

/// Error type for configuration loading failures.
#[derive(Debug)]
pub enum ConfigError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileReadError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config file: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters for one build, reduce and export run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RunConfig {
    /// Side length of the square service area.
    pub area_size: f64,
    /// Number of randomly placed nodes (ignored when `scene` is set).
    pub node_count: usize,
    /// Squared link distance threshold.
    pub radius_squared: f64,
    /// Seed of the coordinate generator.
    pub seed: u64,
    pub strategy: ReductionStrategy,
    pub format: ExportFormat,
    /// Optional JSON scene with pinned node positions.
    pub scene: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            area_size: 10.0,
            node_count: 20,
            radius_squared: DEFAULT_RADIUS_SQUARED,
            seed: 42,
            strategy: ReductionStrategy::SinglePass,
            format: ExportFormat::Dot,
            scene: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative `scene` path is resolved against the config file's directory.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::FileReadError(format!("{}: {}", config_path.display(), e)))?;

        let mut config = Self::parse(&content)?;
        if let Some(scene) = config.scene.take() {
            let resolved = if scene.is_relative() {
                config_path.parent().unwrap_or(Path::new(".")).join(scene)
            } else {
                scene
            };
            config.scene = Some(resolved);
        }
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Reject parameters the builder cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if !self.area_size.is_finite() || self.area_size <= 0.0 {
            return Err(format!("area-size must be a positive number, got {}", self.area_size));
        }
        if !self.radius_squared.is_finite() || self.radius_squared < 0.0 {
            return Err(format!("radius-squared must be a non-negative number, got {}", self.radius_squared));
        }
        Ok(())
    }

    pub fn proximity_parameters(&self) -> ProximityParameters {
        ProximityParameters {
            area_size: self.area_size,
            node_count: self.node_count,
            radius_squared: self.radius_squared,
        }
    }
}
