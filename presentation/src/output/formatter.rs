//! Output formatter trait

use senate_application::{DeliberateOutput, FileCaseOutput, HandoffVerdictOutput};
use senate_domain::PrecedentRecord;

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Result of `deliberate`
    fn format_deliberation(&self, output: &DeliberateOutput) -> String;

    /// Result of `file-case`
    fn format_case_filed(&self, output: &FileCaseOutput) -> String;

    /// Result of `precedent search`
    fn format_precedents(&self, records: &[PrecedentRecord]) -> String;

    /// Result of `handoff`
    fn format_handoff(&self, output: &HandoffVerdictOutput) -> String;
}
