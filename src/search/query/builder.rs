//! Query builder for constructing search queries with a fluent interface

use super::execution::execute_search_query;
use super::results::SearchResults;
use crate::log_search_operation;
use crate::search::engine::SearchEngine;
use crate::search::errors::SearchResult;
use crate::search::types::Match;

/// Search query builder with fluent interface
pub struct SearchQueryBuilder {
    query: String,
    limit: Option<usize>,
}

impl SearchQueryBuilder {
    /// Create a new search query builder returning every match
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Set the maximum number of matches to return
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Execute the search query and return matches in ranking order
    pub fn execute(self, engine: &SearchEngine) -> SearchResult<Vec<Match>> {
        self.execute_with_metadata(engine)
            .map(|results| results.matches)
    }

    /// Execute the search query and return full results with metadata
    pub fn execute_with_metadata(self, engine: &SearchEngine) -> SearchResult<SearchResults> {
        log_search_operation!(
            execute_search_query(engine, &self.query, self.limit),
            self.query
        )
    }
}
