//! Panel parameters

use senate_domain::deliberation::DEFAULT_PANEL_SIZE;
use senate_domain::{DeliberationEngine, build_panel};
use serde::{Deserialize, Serialize};

/// How the deliberation panel is assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelParams {
    /// Number of seats; zero falls back to the default size
    pub agents: usize,
    /// Perspective names overriding the built-in archetypes
    pub perspectives: Vec<String>,
    /// Model labels assigned round-robin to seats
    pub models: Vec<String>,
    /// Judge model label; `None` keeps the engine default
    pub judge_model: Option<String>,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            agents: DEFAULT_PANEL_SIZE,
            perspectives: Vec::new(),
            models: Vec::new(),
            judge_model: None,
        }
    }
}

impl PanelParams {
    pub fn with_agents(mut self, agents: usize) -> Self {
        self.agents = agents;
        self
    }

    pub fn with_perspectives(mut self, perspectives: Vec<String>) -> Self {
        self.perspectives = perspectives;
        self
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    pub fn with_judge_model(mut self, judge_model: impl Into<String>) -> Self {
        self.judge_model = Some(judge_model.into());
        self
    }

    /// Build the engine these parameters describe
    pub fn engine(&self) -> DeliberationEngine {
        let panel = build_panel(self.agents, &self.perspectives, &self.models);
        let engine = DeliberationEngine::new(panel);
        match &self.judge_model {
            Some(judge) => engine.with_judge_model(judge.as_str()),
            None => engine,
        }
    }
}
