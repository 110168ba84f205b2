//! Search precedents use case

use crate::ports::precedent_index::{PrecedentError, PrecedentIndex};
use senate_domain::{PrecedentRecord, SearchOptions};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SearchPrecedentsError {
    #[error("precedent search: {0}")]
    Index(#[from] PrecedentError),
}

#[derive(Debug, Clone, Default)]
pub struct SearchPrecedentsInput {
    pub query: String,
    pub options: SearchOptions,
}

impl SearchPrecedentsInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

pub struct SearchPrecedentsUseCase {
    precedents: Arc<dyn PrecedentIndex>,
}

impl SearchPrecedentsUseCase {
    pub fn new(precedents: Arc<dyn PrecedentIndex>) -> Self {
        Self { precedents }
    }

    pub fn execute(
        &self,
        input: SearchPrecedentsInput,
    ) -> Result<Vec<PrecedentRecord>, SearchPrecedentsError> {
        let query = input.query.trim();
        let results = self.precedents.search(query, &input.options)?;
        debug!("Precedent search {:?} matched {}", query, results.len());
        Ok(results)
    }
}
