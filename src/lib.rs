pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::ConsoleSink, toml_config::ScenarioConfig};

pub use core::{engine::RecordEngine, geometry::perimeter, pipeline::RecordPipeline};
pub use domain::model::{OutputFormat, Point, Rectangle, Report, Scenario, Student};
pub use utils::error::{RecordError, Result};
