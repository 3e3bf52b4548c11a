pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::display::{DisplayFormatter, TerminalView};
pub use config::toml_config::TomlConfig;
pub use core::{
    extractor::extract, pipeline::EarthquakePipeline, task::FetchTask, transport::HttpTransport,
};
pub use domain::model::EarthquakeEvent;
pub use utils::error::{QuakeError, Result};
