//! Deliberation protocol
//!
//! Everything in this module is pure and synchronous. A run is driven by
//! [`DeliberationEngine::deliberate`], which composes the stages below:
//!
//! - [`panel`]: seat catalog and panel construction
//! - [`stance`]: keyword heuristics that produce each seat's initial stance
//! - [`challenge`]: one challenge per seat toward the first dissenting seat
//! - [`consensus`]: majority rule and the two finalization passes
//! - [`synthesis`]: verdict construction from the final round

pub mod challenge;
pub mod consensus;
pub mod engine;
pub mod panel;
pub mod position;
pub mod stance;
pub mod synthesis;
pub mod transcript;

pub use challenge::build_challenges;
pub use consensus::{finalize, majority_decision, majority_of};
pub use engine::{DEFAULT_JUDGE_MODEL, DeliberationEngine};
pub use panel::{
    DEFAULT_PANEL_SIZE, PanelMember, Perspective, build_panel, panel_members, panel_size,
};
pub use position::{Challenge, Position, Round, Tally};
pub use stance::{Assessment, Signals, evaluate_initial};
pub use synthesis::synthesize;
pub use transcript::Transcript;
