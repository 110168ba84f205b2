//! Precedent index domain logic
//!
//! Storage lives behind the application layer's `PrecedentIndex` port; this
//! module owns the record shape, line classification, keyword extraction and
//! ranking, all of which are pure.

pub mod keywords;
pub mod record;
pub mod search;

pub use keywords::extract_keywords;
pub use record::{LoadedLine, PrecedentRecord, parse_line};
pub use search::{
    DEFAULT_SEARCH_LIMIT, SearchOptions, rank_records, score_record, search_limit,
};
