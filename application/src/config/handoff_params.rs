//! Handoff parameters

use std::path::PathBuf;
use std::time::Duration;

/// Deadline applied to one handoff attempt
pub const DEFAULT_HANDOFF_TIMEOUT: Duration = Duration::from_secs(45);

/// Controls implementation handoff after a verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffParams {
    pub enabled: bool,
    /// Directory the tracker command runs in
    pub workspace: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for HandoffParams {
    fn default() -> Self {
        Self {
            enabled: true,
            workspace: None,
            timeout: DEFAULT_HANDOFF_TIMEOUT,
        }
    }
}

impl HandoffParams {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
