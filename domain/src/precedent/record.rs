//! Precedent records
//!
//! A precedent record is the searchable projection of a verdict. Records are
//! stored one JSON object per line; [`parse_line`] classifies each stored
//! line so that a corrupt entry can be skipped without losing the rest of
//! the log.

use super::keywords::extract_keywords;
use crate::core::decision::Decision;
use crate::core::error::DomainError;
use crate::core::string::is_blank;
use crate::core::time::parse_rfc3339;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// One searchable past verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedentRecord {
    pub case_id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub summary: String,
    pub verdict: Decision,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub implementation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dissent: String,
    #[serde(default)]
    pub binding: bool,
    pub verdict_at: String,
    #[serde(default)]
    pub judge: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bead_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl PrecedentRecord {
    /// Project a verdict into a record, extracting keywords from its prose
    pub fn from_verdict(verdict: &Verdict) -> Self {
        let text = [
            verdict.summary.as_str(),
            verdict.reasoning.as_str(),
            verdict.implementation.as_str(),
            verdict.dissent.as_str(),
        ]
        .join(" ");

        Self {
            case_id: verdict.case_id.clone(),
            record_type: verdict.case_type.clone(),
            summary: verdict.summary.clone(),
            verdict: verdict.verdict,
            reasoning: verdict.reasoning.clone(),
            implementation: verdict.implementation.clone(),
            dissent: verdict.dissent.clone(),
            binding: verdict.binding,
            verdict_at: verdict.verdict_at.clone(),
            judge: verdict.judge.clone(),
            bead_id: verdict.bead_id().unwrap_or_default().to_string(),
            keywords: extract_keywords(&text),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(&self.case_id) {
            return Err(DomainError::validation("record.case_id is required"));
        }
        if is_blank(&self.record_type) {
            return Err(DomainError::validation("record.type is required"));
        }
        if is_blank(&self.summary) {
            return Err(DomainError::validation("record.summary is required"));
        }
        if is_blank(&self.verdict_at) {
            return Err(DomainError::validation("record.verdict_at is required"));
        }
        if parse_rfc3339(&self.verdict_at).is_none() {
            return Err(DomainError::validation(format!(
                "record.verdict_at must be RFC3339: {:?}",
                self.verdict_at
            )));
        }
        Ok(())
    }

    /// Lowercased text that search queries are matched against
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.case_id.as_str(),
            self.record_type.as_str(),
            self.summary.as_str(),
            self.reasoning.as_str(),
            self.implementation.as_str(),
            self.dissent.as_str(),
        ];
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Outcome of reading one line of the precedent log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedLine {
    Record(PrecedentRecord),
    /// Malformed or invalid line; `line_no` is 1-based
    Skipped { line_no: usize, reason: String },
}

/// Classify one raw log line. Blank lines yield `None`.
pub fn parse_line(line_no: usize, raw: &str) -> Option<LoadedLine> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    let loaded = match serde_json::from_str::<PrecedentRecord>(line) {
        Err(e) => LoadedLine::Skipped {
            line_no,
            reason: e.to_string(),
        },
        Ok(record) => match record.validate() {
            Ok(()) => LoadedLine::Record(record),
            Err(e) => LoadedLine::Skipped {
                line_no,
                reason: e.to_string(),
            },
        },
    };
    Some(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{Handoff, HandoffStatus};

    fn verdict() -> Verdict {
        Verdict {
            case_id: "senate-2".to_string(),
            filed_at: "2026-02-20T10:00:00Z".to_string(),
            verdict_at: "2026-02-20T10:02:00Z".to_string(),
            case_type: "gate_criteria".to_string(),
            summary: "Adjust coverage threshold".to_string(),
            verdict: Decision::Approved,
            reasoning: "Maintains quality with better velocity".to_string(),
            implementation: "set threshold to 70% for new code".to_string(),
            dissent: String::new(),
            binding: true,
            judge: "claude:opus".to_string(),
            final_positions: vec![],
            handoff: None,
        }
    }

    #[test]
    fn test_from_verdict_copies_fields() {
        let record = PrecedentRecord::from_verdict(&verdict());
        assert_eq!(record.case_id, "senate-2");
        assert_eq!(record.record_type, "gate_criteria");
        assert_eq!(record.verdict, Decision::Approved);
        assert!(record.binding);
        assert!(record.bead_id.is_empty());
        assert!(record.keywords.contains(&"coverage".to_string()));
        assert!(record.keywords.contains(&"velocity".to_string()));
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_from_verdict_includes_handoff_bead() {
        let mut v = verdict();
        v.handoff = Some(Handoff {
            system: "centurion".to_string(),
            bead_id: "athena-123".to_string(),
            status: HandoffStatus::Created,
            created_at: String::new(),
        });
        assert_eq!(PrecedentRecord::from_verdict(&v).bead_id, "athena-123");
    }

    #[test]
    fn test_from_verdict_is_deterministic() {
        let v = verdict();
        assert_eq!(
            PrecedentRecord::from_verdict(&v),
            PrecedentRecord::from_verdict(&v)
        );
    }

    #[test]
    fn test_validate_requires_rfc3339_verdict_at() {
        let mut record = PrecedentRecord::from_verdict(&verdict());
        record.verdict_at = "2026-02-20".to_string();
        assert!(
            record
                .validate()
                .unwrap_err()
                .to_string()
                .starts_with("record.verdict_at must be RFC3339")
        );
    }

    #[test]
    fn test_parse_line_classifies() {
        assert_eq!(parse_line(1, "   "), None);

        let good = serde_json::to_string(&PrecedentRecord::from_verdict(&verdict())).unwrap();
        assert!(matches!(parse_line(1, &good), Some(LoadedLine::Record(_))));

        match parse_line(2, "{not json") {
            Some(LoadedLine::Skipped { line_no, .. }) => assert_eq!(line_no, 2),
            other => panic!("expected skipped line, got {other:?}"),
        }

        let mut invalid = PrecedentRecord::from_verdict(&verdict());
        invalid.summary.clear();
        let raw = serde_json::to_string(&invalid).unwrap();
        match parse_line(3, &raw) {
            Some(LoadedLine::Skipped { reason, .. }) => {
                assert_eq!(reason, "record.summary is required")
            }
            other => panic!("expected skipped line, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_decision_is_skipped() {
        let raw = r#"{"case_id":"x","type":"general","summary":"s","verdict":"maybe","verdict_at":"2026-02-20T10:02:00Z"}"#;
        assert!(matches!(
            parse_line(1, raw),
            Some(LoadedLine::Skipped { .. })
        ));
    }
}
