//! Verdict domain
//!
//! The judge's authoritative outcome for one case, and the implementation
//! handoff that may be attached to it afterwards.

pub mod entities;
pub mod handoff;

pub use entities::{Handoff, HandoffStatus, Verdict};
pub use handoff::{target_system, work_item_description, work_item_title};
