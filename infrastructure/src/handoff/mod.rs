//! Implementation handoff adapters

mod beads;
mod runner;

pub use beads::{BeadsHandoff, DEFAULT_BEADS_COMMAND, DEFAULT_PRIORITY, parse_bead_id};
pub use runner::{CommandOutput, CommandRunner, TokioCommandRunner};
