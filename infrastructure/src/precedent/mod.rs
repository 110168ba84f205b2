//! Precedent index adapters

mod jsonl_index;

pub use jsonl_index::JsonlPrecedentIndex;
