//! Domain layer for senate
//!
//! This crate contains the deliberation protocol and the precedent model.
//! Everything here is pure: no I/O, no clock reads, no global state. Callers
//! pass the current time in explicitly.
//!
//! # Core Concepts
//!
//! ## Deliberation
//!
//! A panel of seats with different perspectives reads a [`Case`], states
//! initial positions, challenges each other, revises, and a judge synthesizes
//! a single [`Verdict`]. The run is recorded as a [`Transcript`].
//!
//! ## Precedent
//!
//! Every verdict is projected into a [`PrecedentRecord`] with extracted
//! keywords so later cases can find similar rulings via [`rank_records`].

pub mod core;
pub mod deliberation;
pub mod precedent;
pub mod verdict;

pub use core::{
    case::{Case, DEFAULT_CASE_TYPE, new_case_id},
    decision::Decision,
    error::DomainError,
    time::{format_rfc3339, parse_rfc3339},
};
pub use deliberation::{
    Challenge, DeliberationEngine, PanelMember, Perspective, Position, Round, Transcript,
    build_panel,
};
pub use precedent::{
    LoadedLine, PrecedentRecord, SearchOptions, extract_keywords, parse_line, rank_records,
};
pub use verdict::{Handoff, HandoffStatus, Verdict};
