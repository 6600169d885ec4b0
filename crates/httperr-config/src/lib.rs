#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod env;
pub mod log;
mod loader;
pub mod output;

use serde::Deserialize;

pub use catalog::*;
pub use env::{ExpandError, expand_env};
pub use log::*;
pub use output::*;

/// Top-level httperr configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
    /// Error catalog customisation
    #[serde(default)]
    pub catalog: CatalogConfig,
}
