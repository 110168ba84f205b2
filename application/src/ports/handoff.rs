//! Handoff port
//!
//! Files implementation work for a binding verdict in an external tracker.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use senate_domain::{Handoff, HandoffStatus, Verdict};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while filing a work item
#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("Failed to start {command}: {message}")]
    Spawn { command: String, message: String },

    #[error("{command} create failed ({status}): {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("Handoff timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unable to parse bead id from output {0:?}")]
    UnparsableOutput(String),
}

/// What the tracker did with a verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffResult {
    pub status: HandoffStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bead_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl HandoffResult {
    pub fn skipped() -> Self {
        Self {
            status: HandoffStatus::Skipped,
            bead_id: None,
            title: None,
        }
    }

    pub fn created(bead_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            status: HandoffStatus::Created,
            bead_id: Some(bead_id.into()),
            title: Some(title.into()),
        }
    }

    /// Handoff metadata to attach to the verdict, for created items only
    pub fn to_handoff(&self, verdict: &Verdict, at: DateTime<Utc>) -> Option<Handoff> {
        match (self.status, &self.bead_id) {
            (HandoffStatus::Created, Some(bead_id)) => {
                Some(Handoff::created(verdict, bead_id.as_str(), at))
            }
            _ => None,
        }
    }
}

/// Adapter that creates work items in the tracker
///
/// Implementations skip verdicts that are not binding or are deferred, and
/// return `HandoffResult::skipped()` without contacting the tracker.
#[async_trait]
pub trait HandoffPort: Send + Sync {
    /// Create a work item for `verdict`, running inside `workspace` when given
    async fn create_bead(
        &self,
        verdict: &Verdict,
        workspace: Option<&Path>,
    ) -> Result<HandoffResult, HandoffError>;
}

/// Handoff adapter that never files anything
pub struct NoHandoff;

#[async_trait]
impl HandoffPort for NoHandoff {
    async fn create_bead(
        &self,
        _verdict: &Verdict,
        _workspace: Option<&Path>,
    ) -> Result<HandoffResult, HandoffError> {
        Ok(HandoffResult::skipped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::fixed_now;
    use senate_domain::{Case, DeliberationEngine};

    fn verdict() -> Verdict {
        let mut case = Case::quick("Should we bypass the rollback safeguard?", "ops");
        case.normalize(fixed_now());
        DeliberationEngine::default()
            .deliberate(&case, fixed_now())
            .unwrap()
            .1
    }

    #[test]
    fn test_only_created_results_attach() {
        let v = verdict();
        assert!(HandoffResult::skipped().to_handoff(&v, fixed_now()).is_none());

        let attached = HandoffResult::created("athena-9", "t")
            .to_handoff(&v, fixed_now())
            .unwrap();
        assert_eq!(attached.bead_id, "athena-9");
        assert_eq!(attached.status, HandoffStatus::Created);
        assert_eq!(attached.system, "athena");
    }

    #[test]
    fn test_skipped_result_json_omits_bead() {
        let json = serde_json::to_value(HandoffResult::skipped()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "skipped" }));
    }

    #[tokio::test]
    async fn test_no_handoff_always_skips() {
        let result = NoHandoff.create_bead(&verdict(), None).await.unwrap();
        assert_eq!(result, HandoffResult::skipped());
    }
}
