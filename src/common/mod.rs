//! Input handling shared by the binary: run configuration and scene files.

pub mod config;
pub mod scene;

pub use config::RunConfig;
pub use scene::load_scene;
