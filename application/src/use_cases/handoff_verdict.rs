//! Handoff verdict use case
//!
//! Files implementation work for a verdict that was stored without one,
//! e.g. because handoff was disabled or failed during deliberation.

use super::shared::{file_work_item, run_stage};
use crate::config::HandoffParams;
use crate::ports::case_repository::{CaseRepository, RepositoryError};
use crate::ports::handoff::{HandoffError, HandoffPort, HandoffResult};
use crate::ports::precedent_index::{PrecedentError, PrecedentIndex};
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use chrono::{DateTime, Utc};
use senate_domain::{HandoffStatus, PrecedentRecord, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum HandoffVerdictError {
    #[error("case id is required")]
    MissingCaseId,

    #[error("load verdict: {0}")]
    LoadVerdict(#[source] RepositoryError),

    #[error("handoff: {0}")]
    Handoff(#[from] HandoffError),

    #[error("save verdict: {0}")]
    SaveVerdict(#[source] RepositoryError),

    #[error("update precedent index: {0}")]
    Precedent(#[from] PrecedentError),
}

#[derive(Debug, Clone)]
pub struct HandoffVerdictInput {
    pub case_id: String,
    pub params: HandoffParams,
    pub now: DateTime<Utc>,
}

impl HandoffVerdictInput {
    pub fn new(case_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            case_id: case_id.into(),
            params: HandoffParams::default(),
            now,
        }
    }

    pub fn with_params(mut self, params: HandoffParams) -> Self {
        self.params = params;
        self
    }
}

#[derive(Debug, Clone)]
pub struct HandoffVerdictOutput {
    pub result: HandoffResult,
    /// True when the verdict already carried a bead and nothing was filed
    pub already_filed: bool,
    pub verdict: Verdict,
}

pub struct HandoffVerdictUseCase {
    repository: Arc<dyn CaseRepository>,
    precedents: Arc<dyn PrecedentIndex>,
    handoff: Arc<dyn HandoffPort>,
}

impl HandoffVerdictUseCase {
    pub fn new(
        repository: Arc<dyn CaseRepository>,
        precedents: Arc<dyn PrecedentIndex>,
        handoff: Arc<dyn HandoffPort>,
    ) -> Self {
        Self {
            repository,
            precedents,
            handoff,
        }
    }

    pub async fn execute(
        &self,
        input: HandoffVerdictInput,
    ) -> Result<HandoffVerdictOutput, HandoffVerdictError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: HandoffVerdictInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<HandoffVerdictOutput, HandoffVerdictError> {
        let case_id = input.case_id.trim();
        if case_id.is_empty() {
            return Err(HandoffVerdictError::MissingCaseId);
        }

        let mut verdict = self
            .repository
            .load_verdict(case_id)
            .map_err(HandoffVerdictError::LoadVerdict)?;

        if let Some(bead_id) = verdict.bead_id() {
            info!("Case {} already handed off as {}", case_id, bead_id);
            let result = HandoffResult {
                status: HandoffStatus::Created,
                bead_id: Some(bead_id.to_string()),
                title: None,
            };
            return Ok(HandoffVerdictOutput {
                result,
                already_filed: true,
                verdict,
            });
        }

        let result =
            file_work_item(self.handoff.as_ref(), &verdict, &input.params, progress).await?;

        if let Some(attached) = result.to_handoff(&verdict, input.now) {
            info!("Case {} handed off as {}", case_id, attached.bead_id);
            verdict.handoff = Some(attached);
            run_stage(progress, Stage::SaveVerdict, || {
                self.repository.save_verdict(&verdict)
            })
            .map_err(HandoffVerdictError::SaveVerdict)?;
            // later lines supersede earlier ones for the same case
            run_stage(progress, Stage::IndexPrecedent, || {
                self.precedents.add(&PrecedentRecord::from_verdict(&verdict))
            })?;
        }
        progress.on_finished();

        Ok(HandoffVerdictOutput {
            result,
            already_filed: false,
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::deliberate::{DeliberateInput, DeliberateUseCase};
    use crate::use_cases::test_support::*;
    use senate_domain::Case;

    struct Fixture {
        repository: Arc<MemoryRepository>,
        precedents: Arc<MemoryPrecedents>,
        handoff: Arc<FakeHandoff>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                repository: Arc::new(MemoryRepository::default()),
                precedents: Arc::new(MemoryPrecedents::default()),
                handoff: Arc::new(FakeHandoff::new("athena-7")),
            }
        }

        fn use_case(&self) -> HandoffVerdictUseCase {
            HandoffVerdictUseCase::new(
                self.repository.clone(),
                self.precedents.clone(),
                self.handoff.clone(),
            )
        }

        /// Deliberate without handoff so the stored verdict has no bead
        async fn deliberated(&self, case: Case) -> String {
            let deliberate = DeliberateUseCase::new(
                self.repository.clone(),
                self.precedents.clone(),
                self.handoff.clone(),
            );
            let input =
                DeliberateInput::new(case, fixed_now()).with_handoff(HandoffParams::disabled());
            deliberate.execute(input).await.unwrap().case.id
        }
    }

    fn binding_case() -> Case {
        Case {
            case_type: "gate_criteria".to_string(),
            question: "Tune the lint rule".to_string(),
            evidence: vec!["incident-14".to_string(), "diff-88".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_files_and_supersedes_precedent() {
        let f = Fixture::new();
        let case_id = f.deliberated(binding_case()).await;

        let out = f
            .use_case()
            .execute(HandoffVerdictInput::new(&case_id, fixed_now()))
            .await
            .unwrap();

        assert!(!out.already_filed);
        assert_eq!(out.result.status, HandoffStatus::Created);
        assert_eq!(out.result.bead_id.as_deref(), Some("athena-7"));
        let stored = f.repository.load_verdict(&case_id).unwrap();
        assert_eq!(stored.bead_id(), Some("athena-7"));
        assert_eq!(stored.handoff.unwrap().system, "centurion");

        let records = f.precedents.records();
        assert_eq!(records.len(), 2);
        assert!(records[0].bead_id.is_empty());
        assert_eq!(records[1].bead_id, "athena-7");
    }

    #[tokio::test]
    async fn test_existing_bead_is_reported_not_refiled() {
        let f = Fixture::new();
        let case_id = f.deliberated(binding_case()).await;
        let use_case = f.use_case();
        use_case
            .execute(HandoffVerdictInput::new(&case_id, fixed_now()))
            .await
            .unwrap();

        let again = use_case
            .execute(HandoffVerdictInput::new(&case_id, fixed_now()))
            .await
            .unwrap();

        assert!(again.already_filed);
        assert_eq!(again.result.bead_id.as_deref(), Some("athena-7"));
        assert_eq!(f.handoff.calls(), 1);
        assert_eq!(f.precedents.records().len(), 2);
    }

    #[tokio::test]
    async fn test_skipped_handoff_leaves_verdict_untouched() {
        let f = Fixture::new();
        let case_id = f.deliberated(Case::quick("Anything at all?", "")).await;
        let before = f.repository.load_verdict(&case_id).unwrap();
        assert!(!before.needs_implementation());

        let out = f
            .use_case()
            .execute(HandoffVerdictInput::new(&case_id, fixed_now()))
            .await
            .unwrap();

        assert_eq!(out.result.status, HandoffStatus::Skipped);
        assert_eq!(f.repository.load_verdict(&case_id).unwrap(), before);
        assert_eq!(f.precedents.records().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_verdict() {
        let f = Fixture::new();
        let err = f
            .use_case()
            .execute(HandoffVerdictInput::new("senate-404", fixed_now()))
            .await
            .unwrap_err();
        assert!(matches!(err, HandoffVerdictError::LoadVerdict(e) if e.is_not_found()));

        let err = f
            .use_case()
            .execute(HandoffVerdictInput::new("  ", fixed_now()))
            .await
            .unwrap_err();
        assert!(matches!(err, HandoffVerdictError::MissingCaseId));
    }
}
