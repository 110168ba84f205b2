//! Precedent search configuration from TOML (`[precedent]` section)

use super::ConfigIssue;
use senate_domain::precedent::{DEFAULT_SEARCH_LIMIT, search_limit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePrecedentConfig {
    /// Result count when `--limit` is not given; zero or negative means the default
    pub search_limit: i64,
}

impl Default for FilePrecedentConfig {
    fn default() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT as i64,
        }
    }
}

impl FilePrecedentConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.search_limit > 0 {
            return Vec::new();
        }
        vec![ConfigIssue::new(
            "precedent.search_limit",
            format!(
                "{} is not positive, using {DEFAULT_SEARCH_LIMIT}",
                self.search_limit
            ),
        )]
    }

    /// Effective result count
    pub fn limit(&self) -> usize {
        search_limit(self.search_limit)
    }
}
