//! Positions and challenges exchanged during a deliberation round

use crate::core::decision::Decision;
use serde::{Deserialize, Serialize};

/// Which round a position belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    Initial,
    Final,
}

impl Round {
    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Initial => "initial",
            Round::Final => "final",
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A seat's stance at a specific round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub agent_id: String,
    pub model: String,
    pub perspective: String,
    pub round: Round,
    pub stance: Decision,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub concerns: String,
}

impl Position {
    /// Copy of this position re-tagged for the final round
    pub fn into_final(mut self) -> Self {
        self.round = Round::Final;
        self
    }

    /// Replace stance and reasoning, keeping seat identity and concerns
    pub fn revise(&mut self, stance: Decision, reasoning: impl Into<String>) {
        self.stance = stance;
        self.reasoning = reasoning.into();
    }
}

/// One direct challenge from a seat to another seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub from: String,
    pub to: String,
    pub challenge: String,
}

/// Per-decision vote counts over a list of positions
///
/// All four decisions are always present, so an absent stance counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [usize; 4],
}

impl Tally {
    pub fn from_positions(positions: &[Position]) -> Self {
        let mut tally = Self::default();
        for p in positions {
            tally.add(p.stance);
        }
        tally
    }

    pub fn add(&mut self, decision: Decision) {
        self.counts[Self::slot(decision)] += 1;
    }

    pub fn count(&self, decision: Decision) -> usize {
        self.counts[Self::slot(decision)]
    }

    fn slot(decision: Decision) -> usize {
        match decision {
            Decision::Approved => 0,
            Decision::Rejected => 1,
            Decision::Amended => 2,
            Decision::Deferred => 3,
        }
    }
}

impl FromIterator<Decision> for Tally {
    fn from_iter<I: IntoIterator<Item = Decision>>(iter: I) -> Self {
        let mut tally = Self::default();
        for d in iter {
            tally.add(d);
        }
        tally
    }
}
