//! Application-level configuration.
//!
//! These types control how use cases behave. They are filled from the
//! resolved file configuration plus CLI flags by the binary.
//!
//! - [`PanelParams`]: panel size, perspective and model overrides, judge label
//! - [`HandoffParams`]: whether and where to file implementation work

pub mod handoff_params;
pub mod panel_params;

pub use handoff_params::HandoffParams;
pub use panel_params::PanelParams;
