//! Case repository port
//!
//! Persistence for cases, transcripts and verdicts. Each save is an
//! independent, atomic write; nothing here spans two artifacts.

use senate_domain::{Case, DomainError, Transcript, Verdict};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing stored artifacts
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {kind} {id}: {message}")]
    Decode {
        kind: &'static str,
        id: String,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("No {kind} stored for case {id}")]
    NotFound { kind: &'static str, id: String },
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Storage for the artifacts of a deliberation
///
/// Save methods return the location written so callers can report it.
pub trait CaseRepository: Send + Sync {
    /// Validate and store a case
    fn save_case(&self, case: &Case) -> Result<PathBuf, RepositoryError>;

    fn load_case(&self, case_id: &str) -> Result<Case, RepositoryError>;

    fn save_transcript(&self, transcript: &Transcript) -> Result<PathBuf, RepositoryError>;

    fn load_transcript(&self, case_id: &str) -> Result<Transcript, RepositoryError>;

    /// Validate and store a verdict, replacing any previous one for the case
    fn save_verdict(&self, verdict: &Verdict) -> Result<PathBuf, RepositoryError>;

    fn load_verdict(&self, case_id: &str) -> Result<Verdict, RepositoryError>;
}
