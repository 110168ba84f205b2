//! In-memory port doubles for use case tests

use crate::ports::case_outbox::{CaseFiledEnvelope, CaseOutbox, OutboxError};
use crate::ports::case_repository::{CaseRepository, RepositoryError};
use crate::ports::handoff::{HandoffError, HandoffPort, HandoffResult};
use crate::ports::precedent_index::{PrecedentError, PrecedentIndex};
use crate::ports::progress::{ProgressNotifier, Stage};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use senate_domain::{Case, LoadedLine, PrecedentRecord, Transcript, Verdict};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap()
}

#[derive(Default)]
pub(crate) struct MemoryRepository {
    pub cases: Mutex<HashMap<String, Case>>,
    pub transcripts: Mutex<HashMap<String, Transcript>>,
    pub verdicts: Mutex<HashMap<String, Verdict>>,
    pub fail_verdict_saves: AtomicBool,
}

impl MemoryRepository {
    pub fn failing_verdict_saves() -> Self {
        let repo = Self::default();
        repo.fail_verdict_saves.store(true, Ordering::SeqCst);
        repo
    }
}

impl CaseRepository for MemoryRepository {
    fn save_case(&self, case: &Case) -> Result<PathBuf, RepositoryError> {
        case.validate()?;
        self.cases
            .lock()
            .unwrap()
            .insert(case.id.clone(), case.clone());
        Ok(PathBuf::from(format!("cases/{}.json", case.id)))
    }

    fn load_case(&self, case_id: &str) -> Result<Case, RepositoryError> {
        self.cases
            .lock()
            .unwrap()
            .get(case_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                kind: "case",
                id: case_id.to_string(),
            })
    }

    fn save_transcript(&self, transcript: &Transcript) -> Result<PathBuf, RepositoryError> {
        self.transcripts
            .lock()
            .unwrap()
            .insert(transcript.case_id.clone(), transcript.clone());
        Ok(PathBuf::from(format!(
            "transcripts/{}.json",
            transcript.case_id
        )))
    }

    fn load_transcript(&self, case_id: &str) -> Result<Transcript, RepositoryError> {
        self.transcripts
            .lock()
            .unwrap()
            .get(case_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                kind: "transcript",
                id: case_id.to_string(),
            })
    }

    fn save_verdict(&self, verdict: &Verdict) -> Result<PathBuf, RepositoryError> {
        if self.fail_verdict_saves.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        verdict.validate()?;
        self.verdicts
            .lock()
            .unwrap()
            .insert(verdict.case_id.clone(), verdict.clone());
        Ok(PathBuf::from(format!("verdicts/{}.json", verdict.case_id)))
    }

    fn load_verdict(&self, case_id: &str) -> Result<Verdict, RepositoryError> {
        self.verdicts
            .lock()
            .unwrap()
            .get(case_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                kind: "verdict",
                id: case_id.to_string(),
            })
    }
}

#[derive(Default)]
pub(crate) struct MemoryPrecedents {
    pub lines: Mutex<Vec<LoadedLine>>,
}

impl MemoryPrecedents {
    pub fn records(&self) -> Vec<PrecedentRecord> {
        self.load_all().unwrap()
    }
}

impl PrecedentIndex for MemoryPrecedents {
    fn add(&self, record: &PrecedentRecord) -> Result<(), PrecedentError> {
        record.validate()?;
        self.lines
            .lock()
            .unwrap()
            .push(LoadedLine::Record(record.clone()));
        Ok(())
    }

    fn load_lines(&self) -> Result<Vec<LoadedLine>, PrecedentError> {
        Ok(self.lines.lock().unwrap().clone())
    }
}

/// Files a fixed bead id for every binding verdict
pub(crate) struct FakeHandoff {
    pub bead_id: String,
    pub calls: AtomicUsize,
    pub delay: Option<Duration>,
}

impl FakeHandoff {
    pub fn new(bead_id: &str) -> Self {
        Self {
            bead_id: bead_id.to_string(),
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new("never-1")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HandoffPort for FakeHandoff {
    async fn create_bead(
        &self,
        verdict: &Verdict,
        _workspace: Option<&Path>,
    ) -> Result<HandoffResult, HandoffError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if !verdict.needs_implementation() {
            return Ok(HandoffResult::skipped());
        }
        Ok(HandoffResult::created(
            self.bead_id.clone(),
            senate_domain::verdict::work_item_title(verdict),
        ))
    }
}

#[derive(Default)]
pub(crate) struct MemoryOutbox {
    pub envelopes: Mutex<Vec<CaseFiledEnvelope>>,
}

impl CaseOutbox for MemoryOutbox {
    fn queue_case_filed(&self, envelope: &CaseFiledEnvelope) -> Result<PathBuf, OutboxError> {
        self.envelopes.lock().unwrap().push(envelope.clone());
        Ok(PathBuf::from("outbox/case-filed.jsonl"))
    }
}

/// Records stage events in order
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub events: Mutex<Vec<(Stage, Option<bool>)>>,
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: Stage) {
        self.events.lock().unwrap().push((stage, None));
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        self.events.lock().unwrap().push((stage, Some(success)));
    }
}
