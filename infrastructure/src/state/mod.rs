//! Filesystem state directory
//!
//! ```text
//! <root>/
//!   cases/<id>.json
//!   verdicts/<id>.json
//!   transcripts/<id>.json
//!   precedents/index.jsonl
//!   outbox/case-filed.jsonl
//! ```

mod case_file;
mod state_dir;

pub use case_file::read_case_file;
pub use state_dir::{DEFAULT_STATE_DIR, StateDir};
