use anyhow::Context;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::common::{RunConfig, load_scene};
use crate::topology::{
    CoordinateSource, FixedCoordinates, ProximityParameters, ReductionReport, SeededCoordinates, build_proximity_graph, reduce, write_graph,
};

mod common;
mod topology;

/// Build, reduce and export one topology according to `config`.
///
/// Positions come from the scene file when one is configured, otherwise from
/// the seeded generator.
fn run_pipeline<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<ReductionReport> {
    let (params, mut source): (ProximityParameters, Box<dyn CoordinateSource>) = match &config.scene {
        Some(path) => {
            let scene = load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))?;
            info!("Loaded {} nodes from scene {}", scene.nodes.len(), path.display());
            let params = ProximityParameters {
                node_count: scene.nodes.len(),
                ..config.proximity_parameters()
            };
            let source: Box<dyn CoordinateSource> = Box::new(FixedCoordinates::from_points(&scene.positions()));
            (params, source)
        }
        None => {
            let source: Box<dyn CoordinateSource> = Box::new(SeededCoordinates::new(config.seed));
            (config.proximity_parameters(), source)
        }
    };

    let mut graph = build_proximity_graph(&params, source.as_mut());
    let report = reduce(&mut graph, config.strategy);
    log::debug!("Symmetric after reduction: {}", graph.is_symmetric());

    write_graph(&graph, config.format, out).context("Failed to write graph")?;
    out.flush().context("Failed to flush output")?;
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    // Logging setup; logs go to stderr so stdout carries only the graph
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("wireless_topology"), LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let config = RunConfig::load(&path).with_context(|| format!("Failed to load configuration {}", path.display()))?;
            info!("Loaded configuration: {:?}", path);
            config
        }
        None => {
            info!("No configuration file given, using defaults");
            RunConfig::default()
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_pipeline(&config, &mut out)?;
    Ok(())
}
