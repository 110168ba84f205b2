//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters
//! by the `to_params` helpers.

mod handoff;
mod logging;
mod output;
mod panel;
mod precedent;

pub use handoff::FileHandoffConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use panel::FilePanelConfig;
pub use precedent::FilePrecedentConfig;

use serde::{Deserialize, Serialize};

/// A configuration value that is accepted but probably not what was meant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key, e.g. `handoff.timeout_secs`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Root of the state directory (cases, verdicts, transcripts, precedents)
    pub state_dir: Option<String>,
    /// Panel composition
    pub panel: FilePanelConfig,
    /// Implementation handoff
    pub handoff: FileHandoffConfig,
    /// Precedent search defaults
    pub precedent: FilePrecedentConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are warnings: every value still has a usable interpretation.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(dir) = &self.state_dir
            && dir.trim().is_empty()
        {
            issues.push(ConfigIssue::new(
                "state_dir",
                "empty value, falling back to ./state",
            ));
        }
        issues.extend(self.panel.validate());
        issues.extend(self.handoff.validate());
        issues.extend(self.precedent.validate());
        issues.extend(self.output.validate());

        issues
    }
}
