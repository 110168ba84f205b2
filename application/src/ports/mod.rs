//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod case_outbox;
pub mod case_repository;
pub mod handoff;
pub mod precedent_index;
pub mod progress;
