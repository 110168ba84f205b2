//! Configuration file support for senate
//!
//! Loads `config.toml`, `senate.toml` and `SENATE_*` environment overrides
//! through figment, then converts the raw structure into application
//! parameters.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileHandoffConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FilePanelConfig, FilePrecedentConfig,
};
pub use loader::ConfigLoader;
