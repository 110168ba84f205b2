//! Verdict synthesis
//!
//! Collapses final positions into a single verdict: majority decision,
//! consolidated reasoning and dissent, implementation guidance and the
//! binding flag.

use super::consensus::majority_of;
use super::position::Position;
use crate::core::case::Case;
use crate::core::decision::Decision;
use crate::core::string::{is_blank, unique_first_n};
use crate::core::time::format_rfc3339;
use crate::verdict::Verdict;
use chrono::{DateTime, Utc};

/// How many reasoning / dissent entries a verdict keeps
const MAX_CONSOLIDATED: usize = 2;

const NO_CONVERGENCE: &str = "Panel did not converge strongly; defaulting to defer for safety.";

/// Build the verdict for `case` from the final round
pub fn synthesize(
    case: &Case,
    final_positions: &[Position],
    judge: &str,
    verdict_at: DateTime<Utc>,
) -> Verdict {
    let decision = majority_of(final_positions).unwrap_or(Decision::Deferred);

    let (aligned, dissenting): (Vec<&Position>, Vec<&Position>) =
        final_positions.iter().partition(|p| p.stance == decision);

    let mut reasoning =
        unique_first_n(aligned.iter().map(|p| p.reasoning.as_str()), MAX_CONSOLIDATED).join(" ");
    if reasoning.is_empty() {
        reasoning = NO_CONVERGENCE.to_string();
    }

    let dissent = unique_first_n(
        dissenting
            .iter()
            .map(|p| format!("{}: {}", p.agent_id, p.reasoning)),
        MAX_CONSOLIDATED,
    )
    .join(" | ");

    Verdict {
        case_id: case.id.clone(),
        filed_at: case.filed_at.clone(),
        verdict_at: format_rfc3339(verdict_at),
        case_type: case.case_type.clone(),
        summary: case.summary.clone(),
        verdict: decision,
        reasoning,
        implementation: implementation_guidance(case, decision),
        dissent,
        binding: decision.is_binding(),
        judge: judge.to_string(),
        final_positions: final_positions.to_vec(),
        handoff: None,
    }
}

/// The requested decision text if the filer gave one, else a template
pub fn implementation_guidance(case: &Case, decision: Decision) -> String {
    if !is_blank(&case.requested_decision) {
        return case.requested_decision.clone();
    }
    match decision {
        Decision::Approved => {
            "Proceed with implementation as proposed and document this verdict as precedent."
        }
        Decision::Rejected => {
            "Do not implement the requested change; file a follow-up with safer alternatives."
        }
        Decision::Amended => {
            "Implement a narrowed version with explicit guardrails and measurable acceptance criteria."
        }
        Decision::Deferred => {
            "Collect additional evidence and re-file the case for renewed deliberation."
        }
    }
    .to_string()
}
