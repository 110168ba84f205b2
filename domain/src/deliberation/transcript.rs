//! Deliberation transcript

use super::panel::PanelMember;
use super::position::{Challenge, Position};
use serde::{Deserialize, Serialize};

/// Auditable record of one deliberation run. Written once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub case_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub panel: Vec<PanelMember>,
    pub initial_positions: Vec<Position>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    pub final_positions: Vec<Position>,
    pub judge_model: String,
}

