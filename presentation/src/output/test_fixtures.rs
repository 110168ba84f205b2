//! Shared results for formatter tests

use chrono::{TimeZone, Utc};
use senate_application::{DeliberateOutput, HandoffResult, HandoffVerdictOutput};
use senate_domain::{Case, DeliberationEngine, Handoff, PrecedentRecord, Verdict};
use std::path::PathBuf;

fn rejected_verdict() -> (Case, senate_domain::Transcript, Verdict) {
    let now = Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap();
    let mut case = Case::quick("Should we bypass the rollback safeguard to ship today?", "ops");
    case.id = "senate-1".to_string();
    case.normalize(now);
    let (transcript, verdict) = DeliberationEngine::default().deliberate(&case, now).unwrap();
    (case, transcript, verdict)
}

pub(crate) fn deliberation(bead: Option<&str>) -> DeliberateOutput {
    let (case, transcript, mut verdict) = rejected_verdict();
    let handoff = bead.map(|id| HandoffResult::created(id, "title"));
    if let Some(id) = bead {
        verdict.handoff = Some(Handoff::created(&verdict, id, Utc::now()));
    }
    DeliberateOutput {
        case,
        transcript,
        verdict,
        case_file: PathBuf::from("state/cases/senate-1.json"),
        transcript_file: PathBuf::from("state/transcripts/senate-1.json"),
        verdict_file: PathBuf::from("state/verdicts/senate-1.json"),
        handoff,
    }
}

pub(crate) fn record(case_id: &str, summary: &str) -> PrecedentRecord {
    let (_, _, mut verdict) = rejected_verdict();
    verdict.case_id = case_id.to_string();
    verdict.summary = summary.to_string();
    PrecedentRecord::from_verdict(&verdict)
}

pub(crate) fn handoff_output(already_filed: bool) -> HandoffVerdictOutput {
    let (_, _, verdict) = rejected_verdict();
    HandoffVerdictOutput {
        result: HandoffResult::created("athena-7", "title"),
        already_filed,
        verdict,
    }
}
