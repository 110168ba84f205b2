//! Handoff configuration from TOML (`[handoff]` section)

use super::ConfigIssue;
use senate_application::HandoffParams;
use senate_application::config::handoff_params::DEFAULT_HANDOFF_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Raw handoff configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHandoffConfig {
    /// File work items for binding verdicts
    pub enabled: bool,
    /// Tracker executable
    pub command: String,
    /// Directory the tracker runs in
    pub workspace: Option<String>,
    /// Deadline for one tracker invocation
    pub timeout_secs: u64,
    /// Priority passed to the tracker
    pub priority: u8,
}

impl Default for FileHandoffConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "bd".to_string(),
            workspace: None,
            timeout_secs: DEFAULT_HANDOFF_TIMEOUT.as_secs(),
            priority: 2,
        }
    }
}

impl FileHandoffConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::new(
                "handoff.timeout_secs",
                format!(
                    "0 would time out immediately, using {}",
                    DEFAULT_HANDOFF_TIMEOUT.as_secs()
                ),
            ));
        }
        if self.command.trim().is_empty() {
            issues.push(ConfigIssue::new("handoff.command", "empty, using bd"));
        }
        issues
    }

    /// Parameters for the handoff use case.
    ///
    /// `fallback_workspace` is used when no workspace is configured (the
    /// binary passes `ATHENA_WORKSPACE`).
    pub fn to_params(&self, fallback_workspace: Option<&str>) -> HandoffParams {
        let timeout = if self.timeout_secs == 0 {
            DEFAULT_HANDOFF_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        };
        let mut params = HandoffParams {
            enabled: self.enabled,
            workspace: None,
            timeout,
        };
        let workspace = self
            .workspace
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .or_else(|| fallback_workspace.map(str::trim).filter(|w| !w.is_empty()));
        if let Some(workspace) = workspace {
            params = params.with_workspace(PathBuf::from(workspace));
        }
        params
    }
}
