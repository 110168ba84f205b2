//! Precedent index port
//!
//! An append-only log of [`PrecedentRecord`]s. Adapters only implement
//! [`PrecedentIndex::add`] and [`PrecedentIndex::load_lines`]; collapsing
//! skipped lines and ranking are shared provided methods.

use senate_domain::{DomainError, LoadedLine, PrecedentRecord, SearchOptions, rank_records};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur in precedent index operations
#[derive(Error, Debug)]
pub enum PrecedentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode precedent record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] DomainError),
}

pub trait PrecedentIndex: Send + Sync {
    /// Validate and append one record
    fn add(&self, record: &PrecedentRecord) -> Result<(), PrecedentError>;

    /// Every non-blank stored line, classified. A missing log is empty.
    fn load_lines(&self) -> Result<Vec<LoadedLine>, PrecedentError>;

    /// Valid records in log order; malformed lines are logged and dropped
    fn load_all(&self) -> Result<Vec<PrecedentRecord>, PrecedentError> {
        let records = self
            .load_lines()?
            .into_iter()
            .filter_map(|line| match line {
                LoadedLine::Record(record) => Some(record),
                LoadedLine::Skipped { line_no, reason } => {
                    debug!("Skipping precedent line {}: {}", line_no, reason);
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Ranked search over the whole log
    fn search(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> Result<Vec<PrecedentRecord>, PrecedentError> {
        Ok(rank_records(self.load_all()?, query, opts))
    }
}
