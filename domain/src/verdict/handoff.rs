//! Implementation handoff wording
//!
//! Binding verdicts become work items in a downstream tracker. The tracker
//! adapter lives outside the domain; what the item says and which system
//! owns it are decided here.

use super::entities::{Handoff, HandoffStatus, Verdict};
use crate::core::string::truncate;
use crate::core::time::format_rfc3339;
use chrono::{DateTime, Utc};

/// Longest summary carried into a work item title, in characters
pub const TITLE_SUMMARY_MAX: usize = 80;

/// Downstream system that owns implementation work for a case type
pub fn target_system(case_type: &str) -> &'static str {
    match case_type.trim() {
        "rule_evolution" => "truthsayer",
        "gate_criteria" => "centurion",
        _ => "athena",
    }
}

/// `[<system>] Senate <case-id>: <summary>`
pub fn work_item_title(verdict: &Verdict) -> String {
    format!(
        "[{}] Senate {}: {}",
        target_system(&verdict.case_type),
        verdict.case_id,
        truncate(&verdict.summary, TITLE_SUMMARY_MAX)
    )
}

pub fn work_item_description(verdict: &Verdict) -> String {
    format!(
        "Binding Senate verdict for case {}\n\nVerdict: {}\nReasoning: {}\nImplementation: {}",
        verdict.case_id,
        verdict.verdict,
        verdict.reasoning.trim(),
        verdict.implementation.trim()
    )
}

impl Handoff {
    /// Record of a work item created for `verdict` at `at`
    pub fn created(verdict: &Verdict, bead_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            system: target_system(&verdict.case_type).to_string(),
            bead_id: bead_id.into(),
            status: HandoffStatus::Created,
            created_at: format_rfc3339(at),
        }
    }
}
