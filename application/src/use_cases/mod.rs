//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod deliberate;
pub mod file_case;
pub mod handoff_verdict;
pub mod search_precedents;
pub(crate) mod shared;
#[cfg(test)]
pub(crate) mod test_support;
