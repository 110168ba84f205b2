//! Challenge generation
//!
//! Every seat challenges the first seat, in panel order, whose initial stance
//! differs from its own. This is a linear first-match scan, not a search for
//! the most common opposing stance.

use super::position::{Challenge, Position};
use crate::core::case::Case;

/// Build one challenge per position that has a differing counterpart
pub fn build_challenges(case: &Case, initial: &[Position]) -> Vec<Challenge> {
    initial
        .iter()
        .filter_map(|pos| {
            let counter = first_counter(pos, initial)?;
            Some(Challenge {
                from: pos.agent_id.clone(),
                to: counter.agent_id.clone(),
                challenge: format!(
                    "Your {} stance underweights {} tradeoffs for case {}.",
                    counter.stance, pos.stance, case.id
                ),
            })
        })
        .collect()
}

/// First position whose stance differs from `pos`
fn first_counter<'a>(pos: &Position, positions: &'a [Position]) -> Option<&'a Position> {
    positions.iter().find(|p| p.stance != pos.stance)
}
