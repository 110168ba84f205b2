//! Case-filing outbox port
//!
//! Filed cases are queued as envelopes for a relay to pick up later. The
//! relay itself is not part of this workspace.

use chrono::{DateTime, Utc};
use senate_domain::{Case, format_rfc3339};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Event type written on every case-filing envelope
pub const CASE_FILED_EVENT: &str = "senate.case.filed";

#[derive(Error, Debug)]
pub enum OutboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode outbox envelope: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One queued case filing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseFiledEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,
    pub filed_at: String,
    pub relay_integration_stub: bool,
    pub case_id: String,
    pub case: Case,
}

impl CaseFiledEnvelope {
    pub fn new(case: Case, at: DateTime<Utc>) -> Self {
        Self {
            event_type: CASE_FILED_EVENT.to_string(),
            filed_at: format_rfc3339(at),
            relay_integration_stub: true,
            case_id: case.id.clone(),
            case,
        }
    }
}

pub trait CaseOutbox: Send + Sync {
    /// Append an envelope; returns where it was queued
    fn queue_case_filed(&self, envelope: &CaseFiledEnvelope) -> Result<PathBuf, OutboxError>;
}
