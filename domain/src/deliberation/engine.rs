//! Deliberation engine
//!
//! Runs the protocol for one case:
//!
//! ```text
//! validate case
//!     ↓
//! initial positions   (one stance per seat)
//!     ↓
//! challenges          (first differing seat)
//!     ↓
//! final positions     (majority alignment, then the no-evidence rule)
//!     ↓
//! verdict synthesis   (majority, reasoning, dissent, guidance)
//! ```
//!
//! The engine holds no state between runs; `deliberate` is a pure function of
//! the case and the supplied clock reading.

use super::challenge::build_challenges;
use super::consensus::finalize;
use super::panel::{DEFAULT_PANEL_SIZE, Perspective, build_panel, panel_members};
use super::position::{Position, Round};
use super::stance::evaluate_initial;
use super::synthesis::synthesize;
use super::transcript::Transcript;
use crate::core::case::Case;
use crate::core::error::DomainError;
use crate::core::time::format_rfc3339;
use crate::verdict::Verdict;
use chrono::{DateTime, Duration, Utc};

/// Model label recorded for the judge
pub const DEFAULT_JUDGE_MODEL: &str = "claude:opus";

/// Simulated length of one deliberation; the verdict is stamped this long after the start.
pub const DELIBERATION_DURATION_MINUTES: i64 = 2;

/// Runs the deliberation protocol over a fixed panel
#[derive(Debug, Clone)]
pub struct DeliberationEngine {
    panel: Vec<Perspective>,
    judge_model: String,
}

impl DeliberationEngine {
    /// Create an engine; an empty panel is replaced by the default three seats
    pub fn new(panel: Vec<Perspective>) -> Self {
        let panel = if panel.is_empty() {
            build_panel::<&str>(DEFAULT_PANEL_SIZE, &[], &[])
        } else {
            panel
        };
        Self {
            panel,
            judge_model: DEFAULT_JUDGE_MODEL.to_string(),
        }
    }

    /// Override the judge model label (blank keeps the default)
    pub fn with_judge_model(mut self, judge_model: impl Into<String>) -> Self {
        let judge_model = judge_model.into();
        if !judge_model.trim().is_empty() {
            self.judge_model = judge_model.trim().to_string();
        }
        self
    }

    pub fn panel(&self) -> &[Perspective] {
        &self.panel
    }

    pub fn judge_model(&self) -> &str {
        &self.judge_model
    }

    /// Run initial positions, challenges, final positions and verdict synthesis
    pub fn deliberate(
        &self,
        case: &Case,
        now: DateTime<Utc>,
    ) -> Result<(Transcript, Verdict), DomainError> {
        case.validate()?;

        let started = now;
        let completed = started + Duration::minutes(DELIBERATION_DURATION_MINUTES);
        let members = panel_members(&self.panel);

        let initial: Vec<Position> = self
            .panel
            .iter()
            .zip(&members)
            .map(|(seat, member)| {
                let assessment = evaluate_initial(case, seat);
                Position {
                    agent_id: member.agent_id.clone(),
                    model: member.model.clone(),
                    perspective: member.perspective.clone(),
                    round: Round::Initial,
                    stance: assessment.stance,
                    reasoning: assessment.reasoning.to_string(),
                    concerns: assessment.concerns.to_string(),
                }
            })
            .collect();

        let challenges = build_challenges(case, &initial);
        let final_positions = finalize(case, &initial, &challenges);
        let verdict = synthesize(case, &final_positions, &self.judge_model, completed);

        let transcript = Transcript {
            case_id: case.id.clone(),
            started_at: format_rfc3339(started),
            completed_at: format_rfc3339(completed),
            panel: members,
            initial_positions: initial,
            challenges,
            final_positions,
            judge_model: self.judge_model.clone(),
        };
        Ok((transcript, verdict))
    }
}

impl Default for DeliberationEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
