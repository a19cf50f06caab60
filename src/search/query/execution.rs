//! Search query execution logic

use tantivy::TantivyDocument;
use tantivy::collector::{Count, TopDocs};

use super::parsing::parse_query;
use super::results::{SearchResults, convert_to_match};
use crate::search::engine::SearchEngine;
use crate::search::errors::{SearchError, SearchResult};

/// Execute a search query against the index
///
/// With no limit every matching document is returned.
pub(crate) fn execute_search_query(
    engine: &SearchEngine,
    query_str: &str,
    limit: Option<usize>,
) -> SearchResult<SearchResults> {
    let searcher = engine.reader().searcher();
    let query = parse_query(engine, query_str)?;

    let total_count = searcher.search(&*query, &Count).map_err(|e| {
        SearchError::SearchExecution(format!("Failed to count search results: {e}"))
    })?;

    let fetch_limit = limit.unwrap_or(total_count).min(total_count);
    if fetch_limit == 0 {
        return Ok(SearchResults {
            matches: Vec::new(),
            total_count,
            query: query_str.to_string(),
        });
    }

    let top_docs = searcher
        .search(&*query, &TopDocs::with_limit(fetch_limit))
        .map_err(|e| {
            SearchError::SearchExecution(format!("Failed to execute search query: {e}"))
        })?;

    let mut matches = Vec::with_capacity(top_docs.len());
    for (score, doc_address) in top_docs {
        let doc: TantivyDocument = searcher.doc(doc_address).map_err(|e| {
            SearchError::SearchExecution(format!("Failed to retrieve document: {e}"))
        })?;
        matches.push(convert_to_match(&doc, engine, score)?);
    }

    Ok(SearchResults {
        matches,
        total_count,
        query: query_str.to_string(),
    })
}
