//! Decision value object
//!
//! A decision is both a seat's stance in a round and the final verdict of a case.

use serde::{Deserialize, Serialize};

/// One of the four outcomes a seat or the judge can reach
///
/// # Example
///
/// ```
/// use senate_domain::Decision;
///
/// let d: Decision = "approve".parse().unwrap();
/// assert_eq!(d, Decision::Approved);
/// assert_eq!(d.to_string(), "approved");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
    Amended,
    Deferred,
}

impl Decision {
    /// Every decision, in tally order. Ties in a stable sort keep this order.
    pub const ALL: [Decision; 4] = [
        Decision::Approved,
        Decision::Rejected,
        Decision::Amended,
        Decision::Deferred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Rejected => "rejected",
            Decision::Amended => "amended",
            Decision::Deferred => "deferred",
        }
    }

    /// A deferred verdict never obligates downstream work.
    pub fn is_binding(&self) -> bool {
        !matches!(self, Decision::Deferred)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Decision {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" | "approved" => Ok(Decision::Approved),
            "reject" | "rejected" => Ok(Decision::Rejected),
            "amend" | "amended" => Ok(Decision::Amended),
            "defer" | "deferred" => Ok(Decision::Deferred),
            _ => Err(crate::core::error::DomainError::InvalidDecision(
                s.to_string(),
            )),
        }
    }
}
