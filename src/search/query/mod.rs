//! Search query execution and result processing
//!
//! This module handles query type detection, query construction and
//! execution against the in-memory index.

use crate::search::engine::SearchEngine;

// Internal modules
mod builder;
mod execution;
mod parsing;
mod query_builders;
mod results;

// Public exports
pub use builder::SearchQueryBuilder;
pub use parsing::{MAX_FUZZY_DISTANCE, SearchQueryType};
pub use results::SearchResults;

use crate::search::errors::SearchResult;

/// Convenience function for simple search queries with logging
pub fn search(
    engine: &SearchEngine,
    query: &str,
    limit: Option<usize>,
) -> SearchResult<SearchResults> {
    let start = std::time::Instant::now();

    let mut builder = SearchQueryBuilder::new(query);
    if let Some(limit) = limit {
        builder = builder.limit(limit);
    }
    let result = builder.execute_with_metadata(engine)?;

    tracing::debug!(
        query = %query,
        results_count = result.matches.len(),
        total_count = result.total_count,
        duration_ms = start.elapsed().as_millis(),
        "Search completed successfully"
    );

    Ok(result)
}
