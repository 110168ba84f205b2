//! Case entity
//!
//! A case is the structured question put before the panel. Callers build one
//! from a file or a quick question, then [`Case::normalize`] fills defaults and
//! [`Case::validate`] enforces the required fields before anything is persisted.

use super::error::DomainError;
use super::string::is_blank;
use super::time::{format_rfc3339, parse_rfc3339};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned when a case is filed without one.
pub const DEFAULT_CASE_TYPE: &str = "general";

/// Build a compact, timestamp-derived case identifier.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use senate_domain::core::case::new_case_id;
///
/// let now = Utc.with_ymd_and_hms(2026, 2, 20, 10, 11, 12).unwrap();
/// assert_eq!(new_case_id(now), "senate-20260220-101112");
/// ```
pub fn new_case_id(now: DateTime<Utc>) -> String {
    format!("senate-{}", now.format("%Y%m%d-%H%M%S"))
}

/// A normalized case file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub case_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub requested_decision: String,
    #[serde(default)]
    pub filed_at: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filed_by: String,
}

impl Case {
    /// Build an ad-hoc case from a single question.
    pub fn quick(question: impl Into<String>, filed_by: impl Into<String>) -> Self {
        let question = question.into();
        Self {
            case_type: DEFAULT_CASE_TYPE.to_string(),
            summary: question.clone(),
            question,
            filed_by: filed_by.into().trim().to_string(),
            ..Default::default()
        }
    }

    /// Fill in defaults: id, type, the summary/question pair and the filing time.
    pub fn normalize(&mut self, now: DateTime<Utc>) {
        self.id = self.id.trim().to_string();
        if self.id.is_empty() {
            self.id = new_case_id(now);
        }
        self.case_type = self.case_type.trim().to_string();
        if self.case_type.is_empty() {
            self.case_type = DEFAULT_CASE_TYPE.to_string();
        }
        self.summary = self.summary.trim().to_string();
        self.question = self.question.trim().to_string();
        if self.summary.is_empty() {
            self.summary = self.question.clone();
        }
        if self.question.is_empty() {
            self.question = self.summary.clone();
        }
        if is_blank(&self.filed_at) {
            self.filed_at = format_rfc3339(now);
        }
    }

    /// Check required fields and formats. Never corrects anything.
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.id) {
            return Err(DomainError::validation("case.id is required"));
        }
        if is_blank(&self.case_type) {
            return Err(DomainError::validation("case.type is required"));
        }
        if is_blank(&self.summary) {
            return Err(DomainError::validation("case.summary is required"));
        }
        if is_blank(&self.question) {
            return Err(DomainError::validation("case.question is required"));
        }
        if is_blank(&self.filed_at) {
            return Err(DomainError::validation("case.filed_at is required"));
        }
        if parse_rfc3339(&self.filed_at).is_none() {
            return Err(DomainError::validation(format!(
                "case.filed_at must be RFC3339: {:?}",
                self.filed_at
            )));
        }
        if let Some(i) = self.evidence.iter().position(|e| is_blank(e)) {
            return Err(DomainError::validation(format!(
                "case.evidence[{i}] must not be empty"
            )));
        }
        Ok(())
    }

    /// Question and summary joined, the text every seat reads.
    pub fn deliberation_text(&self) -> String {
        format!("{} {}", self.question, self.summary)
    }

    /// Number of evidence entries filed with the case
    pub fn evidence_weight(&self) -> usize {
        self.evidence.len()
    }
}
