//! File case use case
//!
//! Stores a case and queues a case-filed envelope for the relay, without
//! deliberating.

use crate::ports::case_outbox::{CaseFiledEnvelope, CaseOutbox, OutboxError};
use crate::ports::case_repository::{CaseRepository, RepositoryError};
use chrono::{DateTime, Utc};
use senate_domain::{Case, DomainError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum FileCaseError {
    #[error("case validation: {0}")]
    InvalidCase(#[source] DomainError),

    #[error("save case: {0}")]
    SaveCase(#[from] RepositoryError),

    #[error("queue relay outbox: {0}")]
    Outbox(#[from] OutboxError),
}

#[derive(Debug, Clone)]
pub struct FileCaseOutput {
    pub envelope: CaseFiledEnvelope,
    pub case_file: PathBuf,
    pub outbox_file: PathBuf,
}

pub struct FileCaseUseCase {
    repository: Arc<dyn CaseRepository>,
    outbox: Arc<dyn CaseOutbox>,
}

impl FileCaseUseCase {
    pub fn new(repository: Arc<dyn CaseRepository>, outbox: Arc<dyn CaseOutbox>) -> Self {
        Self { repository, outbox }
    }

    pub fn execute(
        &self,
        mut case: Case,
        now: DateTime<Utc>,
    ) -> Result<FileCaseOutput, FileCaseError> {
        case.normalize(now);
        case.validate().map_err(FileCaseError::InvalidCase)?;

        let case_file = self.repository.save_case(&case)?;
        let envelope = CaseFiledEnvelope::new(case, now);
        let outbox_file = self.outbox.queue_case_filed(&envelope)?;
        info!("Queued case filing {}", envelope.case_id);

        Ok(FileCaseOutput {
            envelope,
            case_file,
            outbox_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::*;

    #[test]
    fn test_files_and_queues() {
        let repository = Arc::new(MemoryRepository::default());
        let outbox = Arc::new(MemoryOutbox::default());
        let use_case = FileCaseUseCase::new(repository.clone(), outbox.clone());

        let out = use_case
            .execute(Case::quick("Should rule X be retired?", "ops"), fixed_now())
            .unwrap();

        assert_eq!(out.envelope.case_id, "senate-20260220-100000");
        assert_eq!(out.envelope.event_type, "senate.case.filed");
        assert!(out.envelope.relay_integration_stub);
        assert_eq!(out.envelope.case.filed_by, "ops");
        assert!(repository.load_case("senate-20260220-100000").is_ok());
        assert_eq!(outbox.envelopes.lock().unwrap().len(), 1);

        let json = serde_json::to_value(&out.envelope).unwrap();
        assert_eq!(json["type"], "senate.case.filed");
        assert_eq!(json["case"]["type"], "general");
        assert_eq!(json["filed_at"], "2026-02-20T10:00:00Z");
    }

    #[test]
    fn test_invalid_case_is_not_queued() {
        let repository = Arc::new(MemoryRepository::default());
        let outbox = Arc::new(MemoryOutbox::default());
        let use_case = FileCaseUseCase::new(repository, outbox.clone());

        let err = use_case.execute(Case::default(), fixed_now()).unwrap_err();

        assert!(matches!(err, FileCaseError::InvalidCase(_)));
        assert!(outbox.envelopes.lock().unwrap().is_empty());
    }
}
