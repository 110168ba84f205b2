//! Infrastructure layer for senate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the file-backed state directory, the JSONL
//! precedent log, the beads tracker and configuration file loading.

pub mod config;
pub mod handoff;
pub mod precedent;
pub mod state;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileHandoffConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FilePanelConfig, FilePrecedentConfig,
};
pub use handoff::{BeadsHandoff, CommandOutput, CommandRunner, TokioCommandRunner};
pub use precedent::JsonlPrecedentIndex;
pub use state::{DEFAULT_STATE_DIR, StateDir, read_case_file};
