//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use senate_application::{DeliberateOutput, FileCaseOutput, HandoffVerdictOutput};
use senate_domain::PrecedentRecord;
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    /// The verdict as stored
    fn format_deliberation(&self, output: &DeliberateOutput) -> String {
        Self::pretty(&output.verdict)
    }

    /// The queued envelope
    fn format_case_filed(&self, output: &FileCaseOutput) -> String {
        Self::pretty(&output.envelope)
    }

    fn format_precedents(&self, records: &[PrecedentRecord]) -> String {
        Self::pretty(records)
    }

    fn format_handoff(&self, output: &HandoffVerdictOutput) -> String {
        let mut value = serde_json::to_value(&output.result).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            map.insert(
                "already_filed".to_string(),
                serde_json::Value::Bool(output.already_filed),
            );
        }
        Self::pretty(&value)
    }
}
