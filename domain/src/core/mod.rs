//! Core domain concepts shared across all subdomains.
//!
//! - [`case::Case`]: a filed case awaiting deliberation
//! - [`decision::Decision`]: the four possible stances and verdicts
//! - [`time`]: RFC 3339 helpers shared by every timestamped entity
//! - [`error::DomainError`]: domain-level errors

pub mod case;
pub mod decision;
pub mod error;
pub mod string;
pub mod time;
