//! Beads (`bd`) tracker adapter.
//!
//! Shells out to `bd create` and reads the new bead id from its output.

use super::runner::{CommandRunner, TokioCommandRunner};
use async_trait::async_trait;
use regex::Regex;
use senate_application::ports::handoff::{HandoffError, HandoffPort, HandoffResult};
use senate_domain::Verdict;
use senate_domain::verdict::{work_item_description, work_item_title};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info};

pub const DEFAULT_BEADS_COMMAND: &str = "bd";

pub const DEFAULT_PRIORITY: u8 = 2;

/// `<prefix>-<suffix>`, e.g. `athena-7` or `athena-a1b2`
static BEAD_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9]+-[A-Za-z0-9][A-Za-z0-9-]*)")
        .expect("BEAD_ID_PATTERN regex should compile")
});

/// Extract a bead id from `bd create` output.
///
/// The last non-blank line is tried first, then the whole output.
pub fn parse_bead_id(output: &str) -> Option<String> {
    let clean = output.trim();
    if clean.is_empty() {
        return None;
    }
    let last = clean.lines().last().unwrap_or(clean).trim();
    BEAD_ID_PATTERN
        .find(last)
        .or_else(|| BEAD_ID_PATTERN.find(clean))
        .map(|m| m.as_str().to_string())
}

/// [`HandoffPort`] that files binding verdicts with `bd create`
pub struct BeadsHandoff {
    runner: Arc<dyn CommandRunner>,
    command: String,
    priority: u8,
}

impl BeadsHandoff {
    pub fn new() -> Self {
        Self::with_runner(Arc::new(TokioCommandRunner))
    }

    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            command: DEFAULT_BEADS_COMMAND.to_string(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Override the tracker executable (blank keeps `bd`)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        let command = command.into();
        if !command.trim().is_empty() {
            self.command = command.trim().to_string();
        }
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    fn create_args(&self, title: &str, description: &str) -> Vec<String> {
        vec![
            "create".to_string(),
            "--title".to_string(),
            title.to_string(),
            "--priority".to_string(),
            self.priority.to_string(),
            "--description".to_string(),
            description.to_string(),
            "--silent".to_string(),
        ]
    }
}

impl Default for BeadsHandoff {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HandoffPort for BeadsHandoff {
    async fn create_bead(
        &self,
        verdict: &Verdict,
        workspace: Option<&Path>,
    ) -> Result<HandoffResult, HandoffError> {
        if !verdict.needs_implementation() {
            debug!("Case {} needs no implementation work", verdict.case_id);
            return Ok(HandoffResult::skipped());
        }

        let title = work_item_title(verdict);
        let args = self.create_args(&title, &work_item_description(verdict));
        let out = self
            .runner
            .run(&self.command, &args, workspace)
            .await
            .map_err(|e| HandoffError::Spawn {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if !out.success {
            return Err(HandoffError::CommandFailed {
                command: self.command.clone(),
                status: out.status,
                output: out.output.trim().to_string(),
            });
        }

        let bead_id = parse_bead_id(&out.output)
            .ok_or_else(|| HandoffError::UnparsableOutput(out.output.trim().to_string()))?;
        info!("Created bead {} for case {}", bead_id, verdict.case_id);
        Ok(HandoffResult::created(bead_id, title))
    }
}
