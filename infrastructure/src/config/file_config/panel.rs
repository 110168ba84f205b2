//! Panel configuration from TOML (`[panel]` section)

use super::ConfigIssue;
use senate_application::PanelParams;
use senate_domain::deliberation::{DEFAULT_PANEL_SIZE, panel_size};
use serde::{Deserialize, Serialize};

/// Raw panel configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Number of seats; zero or negative means the default size
    pub agents: i64,
    /// Perspective names replacing the built-in archetypes
    pub perspectives: Vec<String>,
    /// Model labels assigned round-robin
    pub models: Vec<String>,
    /// Judge model label
    pub judge_model: Option<String>,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        Self {
            agents: DEFAULT_PANEL_SIZE as i64,
            perspectives: Vec::new(),
            models: Vec::new(),
            judge_model: None,
        }
    }
}

impl FilePanelConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.agents <= 0 {
            issues.push(ConfigIssue::new(
                "panel.agents",
                format!(
                    "{} seats requested, using {DEFAULT_PANEL_SIZE}",
                    self.agents
                ),
            ));
        }
        if self.perspectives.iter().any(|p| p.trim().is_empty()) {
            issues.push(ConfigIssue::new(
                "panel.perspectives",
                "blank perspective names are ignored",
            ));
        }
        issues
    }

    pub fn to_params(&self) -> PanelParams {
        let mut params = PanelParams::default()
            .with_agents(panel_size(self.agents))
            .with_perspectives(self.perspectives.clone())
            .with_models(self.models.clone());
        if let Some(judge) = self.judge_model.as_deref().map(str::trim)
            && !judge.is_empty()
        {
            params = params.with_judge_model(judge);
        }
        params
    }
}
