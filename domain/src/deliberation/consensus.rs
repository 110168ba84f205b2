//! Majority rule and consensus finalization
//!
//! The majority rule is shared by finalization and verdict synthesis:
//!
//! ```text
//! counts  → stable sort desc over [approved, rejected, amended, deferred]
//! top = 0          → no majority
//! top == second    → deferred (hard tie-break)
//! otherwise        → top decision
//! ```
//!
//! Finalization runs two passes over one copy of the initial positions. Pass
//! two can overwrite what pass one produced.

use super::position::{Challenge, Position, Tally};
use crate::core::case::Case;
use crate::core::decision::Decision;

const APPROVAL_TOO_BROAD: &str =
    "After challenge review, approval is too broad; amendment better matches observed risk.";
const AMENDMENT_SAFER_THAN_REJECTION: &str =
    "After challenge review, bounded amendment is safer than outright rejection.";
const NO_CHALLENGES_OR_EVIDENCE: &str =
    "Without challenges or evidence, amendment is the safer consensus posture.";

/// Majority decision over a tally, `None` when nobody voted
///
/// # Example
///
/// ```
/// use senate_domain::Decision;
/// use senate_domain::deliberation::consensus::majority_decision;
/// use senate_domain::deliberation::position::Tally;
///
/// let tally: Tally = [Decision::Approved, Decision::Rejected].into_iter().collect();
/// assert_eq!(majority_decision(&tally), Some(Decision::Deferred));
/// ```
pub fn majority_decision(tally: &Tally) -> Option<Decision> {
    let mut ordered: Vec<(Decision, usize)> = Decision::ALL
        .iter()
        .map(|d| (*d, tally.count(*d)))
        .collect();
    // sort_by is stable, so equal counts keep Decision::ALL order
    ordered.sort_by(|a, b| b.1.cmp(&a.1));

    let (top, top_count) = ordered[0];
    if top_count == 0 {
        return None;
    }
    if ordered[1].1 == top_count {
        return Some(Decision::Deferred);
    }
    Some(top)
}

/// Majority decision over a list of positions
pub fn majority_of(positions: &[Position]) -> Option<Decision> {
    majority_decision(&Tally::from_positions(positions))
}

/// Revise initial positions into final positions
pub fn finalize(case: &Case, initial: &[Position], challenges: &[Challenge]) -> Vec<Position> {
    let mut positions: Vec<Position> = initial.iter().cloned().map(Position::into_final).collect();
    let majority = majority_of(initial);
    align_with_majority(&mut positions, majority);
    temper_unchallenged_approvals(case, challenges, &mut positions);
    positions
}

/// Pass 1: pull outliers toward the majority.
///
/// Approvals facing a rejecting or deferring majority become amendments, as
/// do rejections facing an approving majority. Other mismatches are kept.
pub fn align_with_majority(positions: &mut [Position], majority: Option<Decision>) {
    let Some(majority) = majority else {
        return;
    };
    for p in positions.iter_mut().filter(|p| p.stance != majority) {
        match (p.stance, majority) {
            (Decision::Approved, Decision::Rejected | Decision::Deferred) => {
                p.revise(Decision::Amended, APPROVAL_TOO_BROAD);
            }
            (Decision::Rejected, Decision::Approved) => {
                p.revise(Decision::Amended, AMENDMENT_SAFER_THAN_REJECTION);
            }
            _ => {}
        }
    }
}

/// Pass 2: with no evidence and no challenges, nobody may approve outright.
pub fn temper_unchallenged_approvals(
    case: &Case,
    challenges: &[Challenge],
    positions: &mut [Position],
) {
    if !challenges.is_empty() || case.evidence_weight() > 0 {
        return;
    }
    for p in positions
        .iter_mut()
        .filter(|p| p.stance == Decision::Approved)
    {
        p.revise(Decision::Amended, NO_CHALLENGES_OR_EVIDENCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliberation::position::Round;

    fn pos(agent: &str, stance: Decision) -> Position {
        Position {
            agent_id: agent.to_string(),
            model: "claude:sonnet".to_string(),
            perspective: "pragmatist".to_string(),
            round: Round::Initial,
            stance,
            reasoning: format!("{agent} initial"),
            concerns: "c".to_string(),
        }
    }

    fn tally(decisions: &[Decision]) -> Tally {
        decisions.iter().copied().collect()
    }

    #[test]
    fn test_majority_tie_falls_back_to_defer() {
        use Decision::*;
        assert_eq!(majority_decision(&tally(&[Approved, Rejected])), Some(Deferred));
        assert_eq!(majority_decision(&tally(&[Amended, Rejected])), Some(Deferred));
        assert_eq!(
            majority_decision(&tally(&[Approved, Rejected, Amended])),
            Some(Deferred)
        );
    }

    #[test]
    fn test_majority_strict_winner() {
        use Decision::*;
        assert_eq!(majority_decision(&tally(&[Amended, Amended, Approved])), Some(Amended));
        assert_eq!(majority_decision(&tally(&[Rejected])), Some(Rejected));
        assert_eq!(
            majority_decision(&tally(&[Approved, Approved, Deferred, Rejected])),
            Some(Approved)
        );
    }

    #[test]
    fn test_majority_undefined_without_votes() {
        assert_eq!(majority_decision(&Tally::default()), None);
        assert_eq!(majority_of(&[]), None);
    }

    #[test]
    fn test_pass_one_downgrades_approval_against_rejection() {
        let mut positions = vec![
            pos("agent-1", Decision::Approved),
            pos("agent-2", Decision::Rejected),
            pos("agent-3", Decision::Rejected),
        ];
        align_with_majority(&mut positions, Some(Decision::Rejected));

        assert_eq!(positions[0].stance, Decision::Amended);
        assert_eq!(positions[0].reasoning, APPROVAL_TOO_BROAD);
        assert_eq!(positions[0].concerns, "c");
        assert_eq!(positions[1].reasoning, "agent-2 initial");
    }

    #[test]
    fn test_pass_one_upgrades_rejection_against_approval() {
        let mut positions = vec![
            pos("agent-1", Decision::Approved),
            pos("agent-2", Decision::Approved),
            pos("agent-3", Decision::Rejected),
            pos("agent-4", Decision::Deferred),
        ];
        align_with_majority(&mut positions, Some(Decision::Approved));

        assert_eq!(positions[2].stance, Decision::Amended);
        assert_eq!(positions[2].reasoning, AMENDMENT_SAFER_THAN_REJECTION);
        // deferred against approved passes through
        assert_eq!(positions[3].stance, Decision::Deferred);
    }

    #[test]
    fn test_pass_one_ignores_undefined_majority() {
        let mut positions = vec![pos("agent-1", Decision::Approved)];
        align_with_majority(&mut positions, None);
        assert_eq!(positions[0].stance, Decision::Approved);
    }

    #[test]
    fn test_pass_two_only_without_evidence_and_challenges() {
        let bare = Case::default();
        let mut positions = vec![pos("agent-1", Decision::Approved)];
        temper_unchallenged_approvals(&bare, &[], &mut positions);
        assert_eq!(positions[0].stance, Decision::Amended);
        assert_eq!(positions[0].reasoning, NO_CHALLENGES_OR_EVIDENCE);

        let with_evidence = Case {
            evidence: vec!["log".to_string()],
            ..Default::default()
        };
        let mut positions = vec![pos("agent-1", Decision::Approved)];
        temper_unchallenged_approvals(&with_evidence, &[], &mut positions);
        assert_eq!(positions[0].stance, Decision::Approved);

        let challenge = Challenge {
            from: "agent-1".to_string(),
            to: "agent-2".to_string(),
            challenge: "x".to_string(),
        };
        let mut positions = vec![pos("agent-1", Decision::Approved)];
        temper_unchallenged_approvals(&bare, &[challenge], &mut positions);
        assert_eq!(positions[0].stance, Decision::Approved);
    }

    #[test]
    fn test_finalize_tags_final_round() {
        let initial = vec![
            pos("agent-1", Decision::Amended),
            pos("agent-2", Decision::Amended),
        ];
        let finals = finalize(&Case::default(), &initial, &[]);
        assert!(finals.iter().all(|p| p.round == Round::Final));
        assert!(initial.iter().all(|p| p.round == Round::Initial));
    }

    #[test]
    fn test_finalize_stacks_second_pass() {
        // Unanimous approval with nothing to back it: pass 1 changes nothing,
        // pass 2 turns every approval into an amendment.
        let initial = vec![
            pos("agent-1", Decision::Approved),
            pos("agent-2", Decision::Approved),
        ];
        let finals = finalize(&Case::default(), &initial, &[]);
        assert!(finals.iter().all(|p| p.stance == Decision::Amended));
        assert!(finals.iter().all(|p| p.reasoning == NO_CHALLENGES_OR_EVIDENCE));
    }
}
