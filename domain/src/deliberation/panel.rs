//! Panel construction
//!
//! A panel is an ordered list of [`Perspective`] seats. Seats are assigned
//! round-robin from a catalog; seat ids are positional (`agent-1`, `agent-2`, …),
//! so two seats may share a perspective and still be told apart.

use serde::{Deserialize, Serialize};

/// Panel size used when the caller asks for zero seats
pub const DEFAULT_PANEL_SIZE: usize = 3;

/// Seat count for a requested size; zero or negative falls back to
/// [`DEFAULT_PANEL_SIZE`]
pub fn panel_size(requested: i64) -> usize {
    usize::try_from(requested)
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PANEL_SIZE)
}

/// Model label given to seats built from custom perspective names
pub const DEFAULT_SEAT_MODEL: &str = "claude:sonnet";

/// One configured panel seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspective {
    pub name: String,
    pub model: String,
    pub directive: String,
}

impl Perspective {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        directive: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            directive: directive.into(),
        }
    }

    /// A seat for a caller-supplied perspective name with a generic directive
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into();
        let directive = format!("Represent the {name} perspective with rigorous argumentation.");
        Self::new(name, DEFAULT_SEAT_MODEL, directive)
    }

    /// The five built-in archetypes, in catalog order
    pub fn archetypes() -> Vec<Perspective> {
        vec![
            Perspective::new(
                "pragmatist",
                "claude:sonnet",
                "Prioritize velocity and practical outcomes while keeping risk acceptable.",
            ),
            Perspective::new(
                "purist",
                "claude:sonnet",
                "Prioritize correctness, consistency, and long-term maintainability.",
            ),
            Perspective::new(
                "skeptic",
                "claude:sonnet",
                "Challenge assumptions and focus on hidden risks and missing evidence.",
            ),
            Perspective::new(
                "steward",
                "claude:haiku",
                "Prioritize operational stability and low blast-radius implementation.",
            ),
            Perspective::new(
                "advocate",
                "claude:haiku",
                "Prioritize user value and impact while preserving trust.",
            ),
        ]
    }
}

/// Roster entry recorded in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelMember {
    pub agent_id: String,
    pub model: String,
    pub perspective: String,
}

/// Positional seat id for the seat at `index` (0-based)
pub fn agent_id(index: usize) -> String {
    format!("agent-{}", index + 1)
}

/// Build `size` seats, round-robin over the catalog.
///
/// Blank perspective names are discarded; if none survive, the built-in
/// archetypes are used. Non-blank model names override each seat's model,
/// also round-robin.
///
/// # Example
///
/// ```
/// use senate_domain::deliberation::panel::build_panel;
///
/// let panel = build_panel::<&str>(0, &[], &[]);
/// let names: Vec<_> = panel.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["pragmatist", "purist", "skeptic"]);
/// ```
pub fn build_panel<S: AsRef<str>>(
    size: usize,
    perspective_names: &[S],
    model_names: &[S],
) -> Vec<Perspective> {
    let size = if size == 0 { DEFAULT_PANEL_SIZE } else { size };

    let mut catalog: Vec<Perspective> = perspective_names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(Perspective::custom)
        .collect();
    if catalog.is_empty() {
        catalog = Perspective::archetypes();
    }

    (0..size)
        .map(|i| {
            let mut seat = catalog[i % catalog.len()].clone();
            if !model_names.is_empty() {
                let model = model_names[i % model_names.len()].as_ref().trim();
                if !model.is_empty() {
                    seat.model = model.to_string();
                }
            }
            seat
        })
        .collect()
}

/// Roster for the transcript, with positional ids
pub fn panel_members(panel: &[Perspective]) -> Vec<PanelMember> {
    panel
        .iter()
        .enumerate()
        .map(|(i, seat)| PanelMember {
            agent_id: agent_id(i),
            model: seat.model.clone(),
            perspective: seat.name.clone(),
        })
        .collect()
}
