//! Heuristic stance evaluation
//!
//! Each seat reads the case's question and summary, counts risk and urgency
//! tokens, weighs the evidence, and picks a stance with a fixed reasoning and
//! concerns sentence for its perspective. Pure and total.

use super::panel::Perspective;
use crate::core::case::Case;
use crate::core::decision::Decision;

/// Tokens that raise the risk score
pub const RISK_TOKENS: [&str; 8] = [
    "security",
    "unsafe",
    "drop",
    "delete",
    "disable",
    "bypass",
    "without tests",
    "rollback",
];

/// Tokens that raise the urgency score
pub const URGENCY_TOKENS: [&str; 6] = [
    "urgent",
    "blocker",
    "ship",
    "today",
    "immediately",
    "unblock",
];

/// The three signals every seat weighs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub risk: usize,
    pub urgency: usize,
    pub evidence_weight: usize,
}

impl Signals {
    pub fn from_case(case: &Case) -> Self {
        let text = case.deliberation_text();
        Self {
            risk: token_score(&text, &RISK_TOKENS),
            urgency: token_score(&text, &URGENCY_TOKENS),
            evidence_weight: case.evidence_weight(),
        }
    }
}

/// Initial stance of one seat, before challenges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub stance: Decision,
    pub reasoning: &'static str,
    pub concerns: &'static str,
}

impl Assessment {
    const fn new(stance: Decision, reasoning: &'static str, concerns: &'static str) -> Self {
        Self {
            stance,
            reasoning,
            concerns,
        }
    }
}

/// Count how many distinct tokens occur in `text`, case-insensitively.
///
/// Substring containment; repeats of one token count once.
pub fn token_score(text: &str, tokens: &[&str]) -> usize {
    let text = text.to_lowercase();
    tokens.iter().filter(|tok| text.contains(*tok)).count()
}

/// Evaluate a seat's initial stance on a case
pub fn evaluate_initial(case: &Case, seat: &Perspective) -> Assessment {
    assess(&Signals::from_case(case), &seat.name)
}

/// Perspective branches over precomputed signals
pub fn assess(signals: &Signals, perspective: &str) -> Assessment {
    let Signals {
        risk,
        urgency,
        evidence_weight,
    } = *signals;

    match perspective {
        "pragmatist" => {
            if risk >= 2 {
                Assessment::new(
                    Decision::Rejected,
                    "The change introduces high risk compared to delivery value.",
                    "Risk reduction plan is missing.",
                )
            } else if urgency >= 1 || evidence_weight >= 2 {
                Assessment::new(
                    Decision::Approved,
                    "The path is actionable now and clears immediate delivery constraints.",
                    "Document rollback and ownership.",
                )
            } else {
                Assessment::new(
                    Decision::Amended,
                    "Direction is viable but needs tighter scope before execution.",
                    "Define measurable acceptance criteria.",
                )
            }
        }
        "purist" => {
            if risk >= 1 {
                Assessment::new(
                    Decision::Rejected,
                    "Correctness and safety guarantees are not strong enough for approval.",
                    "Failure modes are under-specified.",
                )
            } else if evidence_weight == 0 {
                Assessment::new(
                    Decision::Deferred,
                    "There is not enough evidence to make a durable decision.",
                    "Need concrete examples or data.",
                )
            } else {
                Assessment::new(
                    Decision::Amended,
                    "The proposal is directionally sound but requires stronger invariants.",
                    "Specify exact rule boundaries.",
                )
            }
        }
        "skeptic" => {
            if evidence_weight == 0 {
                Assessment::new(
                    Decision::Deferred,
                    "The case lacks objective evidence and should not be bound yet.",
                    "Gather incidents, diffs, or metrics first.",
                )
            } else if risk >= 1 {
                Assessment::new(
                    Decision::Rejected,
                    "Edge-case risk remains unresolved under realistic failure scenarios.",
                    "Mitigations are implied but not explicit.",
                )
            } else {
                Assessment::new(
                    Decision::Amended,
                    "Adopt with guardrails to contain unknowns.",
                    "Time-box follow-up validation.",
                )
            }
        }
        _ => {
            if risk >= 2 {
                Assessment::new(
                    Decision::Rejected,
                    "Risk exceeds confidence in current plan.",
                    "Need safer rollout shape.",
                )
            } else if evidence_weight >= 1 {
                Assessment::new(
                    Decision::Amended,
                    "Proceed with modifications grounded in the provided evidence.",
                    "Capture precedent terms explicitly.",
                )
            } else {
                Assessment::new(
                    Decision::Deferred,
                    "Insufficient evidence for a binding conclusion.",
                    "Collect at least one concrete artifact.",
                )
            }
        }
    }
}
