//! Deliberate use case
//!
//! Runs the full pipeline for one case:
//!
//! ```text
//! normalize + validate case
//!     ↓
//! save case
//!     ↓
//! deliberate (pure engine)
//!     ↓
//! save transcript
//!     ↓
//! handoff (optional, bounded by a deadline)
//!     ↓
//! save verdict
//!     ↓
//! append precedent
//! ```
//!
//! Every save is its own step. A failure stops the pipeline where it is and
//! nothing already written is rolled back, so a transcript can exist without
//! a verdict.

use super::shared::{file_work_item, run_stage};
use crate::config::{HandoffParams, PanelParams};
use crate::ports::case_repository::{CaseRepository, RepositoryError};
use crate::ports::handoff::{HandoffError, HandoffPort, HandoffResult};
use crate::ports::precedent_index::{PrecedentError, PrecedentIndex};
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use chrono::{DateTime, Utc};
use senate_domain::{Case, DomainError, PrecedentRecord, Transcript, Verdict};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a deliberation run
#[derive(Error, Debug)]
pub enum DeliberateError {
    #[error("case validation: {0}")]
    InvalidCase(#[source] DomainError),

    #[error("save case: {0}")]
    SaveCase(#[source] RepositoryError),

    #[error("deliberation: {0}")]
    Deliberation(#[source] DomainError),

    #[error("save transcript: {0}")]
    SaveTranscript(#[source] RepositoryError),

    #[error("handoff: {0}")]
    Handoff(#[from] HandoffError),

    #[error("save verdict: {0}")]
    SaveVerdict(#[source] RepositoryError),

    #[error("save precedent: {0}")]
    Precedent(#[from] PrecedentError),
}

/// Input for the Deliberate use case
#[derive(Debug, Clone)]
pub struct DeliberateInput {
    pub case: Case,
    pub panel: PanelParams,
    pub handoff: HandoffParams,
    /// Clock reading used for defaults and timestamps
    pub now: DateTime<Utc>,
}

impl DeliberateInput {
    pub fn new(case: Case, now: DateTime<Utc>) -> Self {
        Self {
            case,
            panel: PanelParams::default(),
            handoff: HandoffParams::default(),
            now,
        }
    }

    pub fn with_panel(mut self, panel: PanelParams) -> Self {
        self.panel = panel;
        self
    }

    pub fn with_handoff(mut self, handoff: HandoffParams) -> Self {
        self.handoff = handoff;
        self
    }
}

/// Everything a deliberation run produced
#[derive(Debug, Clone)]
pub struct DeliberateOutput {
    pub case: Case,
    pub transcript: Transcript,
    pub verdict: Verdict,
    pub case_file: PathBuf,
    pub transcript_file: PathBuf,
    pub verdict_file: PathBuf,
    /// `None` when handoff was disabled
    pub handoff: Option<HandoffResult>,
}

/// Use case for deliberating a case end to end
pub struct DeliberateUseCase {
    repository: Arc<dyn CaseRepository>,
    precedents: Arc<dyn PrecedentIndex>,
    handoff: Arc<dyn HandoffPort>,
}

impl DeliberateUseCase {
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

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: DeliberateInput,
    ) -> Result<DeliberateOutput, DeliberateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: DeliberateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DeliberateOutput, DeliberateError> {
        let DeliberateInput {
            mut case,
            panel,
            handoff,
            now,
        } = input;

        case.normalize(now);
        case.validate().map_err(DeliberateError::InvalidCase)?;

        let case_file = run_stage(progress, Stage::SaveCase, || {
            self.repository.save_case(&case)
        })
        .map_err(DeliberateError::SaveCase)?;
        info!("Filed case {}", case.id);

        let engine = panel.engine();
        let (transcript, mut verdict) = run_stage(progress, Stage::Deliberate, || {
            engine.deliberate(&case, now)
        })
        .map_err(DeliberateError::Deliberation)?;
        info!(
            "Case {} deliberated by {} seats: {}",
            case.id,
            engine.panel().len(),
            verdict.verdict
        );

        let transcript_file = run_stage(progress, Stage::SaveTranscript, || {
            self.repository.save_transcript(&transcript)
        })
        .map_err(DeliberateError::SaveTranscript)?;

        let handoff_result = if handoff.enabled {
            let result = file_work_item(self.handoff.as_ref(), &verdict, &handoff, progress).await?;
            if let Some(attached) = result.to_handoff(&verdict, now) {
                info!("Case {} handed off as {}", case.id, attached.bead_id);
                verdict.handoff = Some(attached);
            }
            Some(result)
        } else {
            None
        };

        let verdict_file = run_stage(progress, Stage::SaveVerdict, || {
            self.repository.save_verdict(&verdict)
        })
        .map_err(DeliberateError::SaveVerdict)?;

        run_stage(progress, Stage::IndexPrecedent, || {
            self.precedents.add(&PrecedentRecord::from_verdict(&verdict))
        })?;
        progress.on_finished();

        Ok(DeliberateOutput {
            case,
            transcript,
            verdict,
            case_file,
            transcript_file,
            verdict_file,
            handoff: handoff_result,
        })
    }
}
