//! Precedent ranking
//!
//! ```text
//! filter by type / verdict
//!     ↓
//! score = query keywords found in the record's search text
//!     ↓
//! sort by score desc, then verdict_at desc (unparsable sorts last)
//!     ↓
//! truncate to limit
//! ```

use super::keywords::extract_keywords;
use super::record::PrecedentRecord;
use crate::core::decision::Decision;
use crate::core::time::parse_rfc3339;
use chrono::{DateTime, Utc};

/// Result count used when no positive limit is given
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Result count for a requested limit; zero or negative falls back to
/// [`DEFAULT_SEARCH_LIMIT`]
pub fn search_limit(requested: i64) -> usize {
    usize::try_from(requested)
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}

/// Filters and limit applied to a precedent search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only records of this case type
    pub record_type: Option<String>,
    /// Only records with this decision
    pub verdict: Option<Decision>,
    /// Maximum results; zero means [`DEFAULT_SEARCH_LIMIT`]
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            record_type: None,
            verdict: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn with_type(mut self, record_type: impl Into<String>) -> Self {
        let record_type = record_type.into();
        self.record_type = (!record_type.trim().is_empty()).then(|| record_type.trim().to_string());
        self
    }

    pub fn with_verdict(mut self, verdict: Decision) -> Self {
        self.verdict = Some(verdict);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_SEARCH_LIMIT
        } else {
            self.limit
        }
    }

    fn accepts(&self, record: &PrecedentRecord) -> bool {
        if let Some(t) = &self.record_type
            && record.record_type != *t
        {
            return false;
        }
        if let Some(v) = self.verdict
            && record.verdict != v
        {
            return false;
        }
        true
    }
}

/// Number of query keywords contained in the record; 1 for an empty query
pub fn score_record(record: &PrecedentRecord, query_keywords: &[String]) -> usize {
    if query_keywords.is_empty() {
        return 1;
    }
    let haystack = record.search_text();
    query_keywords
        .iter()
        .filter(|k| haystack.contains(k.as_str()))
        .count()
}

/// Rank `records` against `query`
///
/// A blank query matches everything. A query made only of stopwords or short
/// tokens matches nothing.
pub fn rank_records(
    records: Vec<PrecedentRecord>,
    query: &str,
    opts: &SearchOptions,
) -> Vec<PrecedentRecord> {
    let query_keywords = extract_keywords(query);
    if query_keywords.is_empty() && !query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, DateTime<Utc>, PrecedentRecord)> = records
        .into_iter()
        .filter(|r| opts.accepts(r))
        .filter_map(|r| {
            let score = score_record(&r, &query_keywords);
            if score == 0 {
                return None;
            }
            let at = parse_rfc3339(&r.verdict_at).unwrap_or(DateTime::<Utc>::MIN_UTC);
            Some((score, at, r))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    scored.truncate(opts.effective_limit());
    scored.into_iter().map(|(_, _, r)| r).collect()
}
