//! Console output formatter for senate results
//!
//! Output is line oriented (`key: value`) so it stays greppable; color only
//! highlights values.

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use senate_application::{DeliberateOutput, FileCaseOutput, HandoffVerdictOutput};
use senate_domain::{Decision, PrecedentRecord};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable colored output
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    pub fn format_deliberation(output: &DeliberateOutput) -> String {
        let verdict = &output.verdict;
        let mut out = String::new();

        out.push_str(&format!("case_id: {}\n", verdict.case_id.bold()));
        out.push_str(&format!("verdict: {}\n", Self::decision(verdict.verdict)));
        out.push_str(&format!("binding: {}\n", verdict.binding));
        out.push_str(&format!("verdict_file: {}\n", output.verdict_file.display()));
        out.push_str(&format!(
            "transcript_file: {}\n",
            output.transcript_file.display()
        ));
        if let Some(bead) = verdict.bead_id() {
            out.push_str(&format!("handoff_bead: {}\n", bead.cyan()));
        }

        out
    }

    pub fn format_case_filed(output: &FileCaseOutput) -> String {
        format!(
            "queued case filing stub: {}\noutbox: {}\n{}\n",
            output.envelope.case_id.bold(),
            output.outbox_file.display(),
            "relay integration is stubbed; the envelope waits in the outbox".dimmed()
        )
    }

    pub fn format_precedents(records: &[PrecedentRecord]) -> String {
        if records.is_empty() {
            return "no precedent matches\n".to_string();
        }
        records
            .iter()
            .map(|r| format!("{} {} {}\n", r.case_id, Self::decision(r.verdict), r.summary))
            .collect()
    }

    pub fn format_handoff(output: &HandoffVerdictOutput) -> String {
        if output.already_filed {
            return format!(
                "handoff already exists: {}\n",
                output.result.bead_id.as_deref().unwrap_or_default().cyan()
            );
        }
        let mut out = format!("handoff status: {}\n", output.result.status);
        if let Some(bead) = &output.result.bead_id {
            out.push_str(&format!("handoff bead: {}\n", bead.cyan()));
        }
        out
    }

    fn decision(decision: Decision) -> ColoredString {
        let label = decision.as_str();
        match decision {
            Decision::Approved => label.green().bold(),
            Decision::Rejected => label.red().bold(),
            Decision::Amended => label.yellow().bold(),
            Decision::Deferred => label.dimmed(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_deliberation(&self, output: &DeliberateOutput) -> String {
        Self::format_deliberation(output)
    }

    fn format_case_filed(&self, output: &FileCaseOutput) -> String {
        Self::format_case_filed(output)
    }

    fn format_precedents(&self, records: &[PrecedentRecord]) -> String {
        Self::format_precedents(records)
    }

    fn format_handoff(&self, output: &HandoffVerdictOutput) -> String {
        Self::format_handoff(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_fixtures::{deliberation, handoff_output, record};

    #[test]
    fn test_deliberation_lines() {
        ConsoleFormatter::set_color(false);
        let text = ConsoleFormatter::format_deliberation(&deliberation(Some("athena-7")));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "case_id: senate-1");
        assert_eq!(lines[1], "verdict: rejected");
        assert_eq!(lines[2], "binding: true");
        assert_eq!(lines[3], "verdict_file: state/verdicts/senate-1.json");
        assert_eq!(lines[4], "transcript_file: state/transcripts/senate-1.json");
        assert_eq!(lines[5], "handoff_bead: athena-7");
    }

    #[test]
    fn test_deliberation_without_bead() {
        ConsoleFormatter::set_color(false);
        let text = ConsoleFormatter::format_deliberation(&deliberation(None));
        assert!(!text.contains("handoff_bead"));
    }

    #[test]
    fn test_precedents() {
        ConsoleFormatter::set_color(false);
        assert_eq!(ConsoleFormatter::format_precedents(&[]), "no precedent matches\n");
        let text = ConsoleFormatter::format_precedents(&[record("senate-2", "Rollback bypass")]);
        assert_eq!(text, "senate-2 rejected Rollback bypass\n");
    }

    #[test]
    fn test_handoff() {
        ConsoleFormatter::set_color(false);
        let text = ConsoleFormatter::format_handoff(&handoff_output(true));
        assert_eq!(text, "handoff already exists: athena-7\n");
        let text = ConsoleFormatter::format_handoff(&handoff_output(false));
        assert_eq!(text, "handoff status: created\nhandoff bead: athena-7\n");
    }
}
