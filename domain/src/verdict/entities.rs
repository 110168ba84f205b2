//! Verdict and handoff entities

use crate::core::decision::Decision;
use crate::core::error::DomainError;
use crate::core::string::is_blank;
use crate::core::time::parse_rfc3339;
use crate::deliberation::position::Position;
use serde::{Deserialize, Serialize};

/// Outcome of an implementation handoff attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoffStatus {
    Created,
    Skipped,
}

impl HandoffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandoffStatus::Created => "created",
            HandoffStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for HandoffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Implementation tracking metadata attached to a verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    /// Downstream system that owns the work (e.g. "athena")
    pub system: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bead_id: String,
    pub status: HandoffStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl Handoff {
    pub fn has_bead(&self) -> bool {
        !is_blank(&self.bead_id)
    }
}

/// The binding result of a deliberation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub case_id: String,
    pub filed_at: String,
    pub verdict_at: String,
    #[serde(rename = "type")]
    pub case_type: String,
    pub summary: String,
    pub verdict: Decision,
    pub reasoning: String,
    pub implementation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dissent: String,
    pub binding: bool,
    pub judge: String,
    #[serde(default)]
    pub final_positions: Vec<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff: Option<Handoff>,
}

impl Verdict {
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.case_id) {
            return Err(DomainError::validation("verdict.case_id is required"));
        }
        if is_blank(&self.filed_at) {
            return Err(DomainError::validation("verdict.filed_at is required"));
        }
        if parse_rfc3339(&self.filed_at).is_none() {
            return Err(DomainError::validation(format!(
                "verdict.filed_at must be RFC3339: {:?}",
                self.filed_at
            )));
        }
        if is_blank(&self.verdict_at) {
            return Err(DomainError::validation("verdict.verdict_at is required"));
        }
        if parse_rfc3339(&self.verdict_at).is_none() {
            return Err(DomainError::validation(format!(
                "verdict.verdict_at must be RFC3339: {:?}",
                self.verdict_at
            )));
        }
        if is_blank(&self.case_type) {
            return Err(DomainError::validation("verdict.type is required"));
        }
        if is_blank(&self.summary) {
            return Err(DomainError::validation("verdict.summary is required"));
        }
        if is_blank(&self.reasoning) {
            return Err(DomainError::validation("verdict.reasoning is required"));
        }
        if is_blank(&self.judge) {
            return Err(DomainError::validation("verdict.judge is required"));
        }
        Ok(())
    }

    /// Bead id of the attached handoff, if one was created
    pub fn bead_id(&self) -> Option<&str> {
        self.handoff
            .as_ref()
            .filter(|h| h.has_bead())
            .map(|h| h.bead_id.as_str())
    }

    /// Whether downstream work should be filed for this verdict
    pub fn needs_implementation(&self) -> bool {
        self.binding && self.verdict != Decision::Deferred
    }
}
