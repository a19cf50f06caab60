//! Search results container and document conversion

use tantivy::{TantivyDocument, schema::Value};

use crate::search::engine::SearchEngine;
use crate::search::errors::{SearchError, SearchResult};
use crate::search::types::Match;

/// Search results container
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Matches in ranking order
    pub matches: Vec<Match>,
    /// Number of documents the query matched, before any limit
    pub total_count: usize,
    pub query: String,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Check if the limit cut off further matches
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.matches.len() < self.total_count
    }

    /// The first `n` matches, ranking order preserved
    #[must_use]
    pub fn top(&self, n: usize) -> &[Match] {
        &self.matches[..n.min(self.matches.len())]
    }
}

/// Convert a Tantivy document to a `Match` by reading its stored reference
pub(crate) fn convert_to_match(
    doc: &TantivyDocument,
    engine: &SearchEngine,
    score: f32,
) -> SearchResult<Match> {
    let reference = doc
        .get_first(engine.schema().url)
        .and_then(|v| v.as_str())
        .ok_or_else(|| SearchError::SearchExecution("Indexed document has no url".to_string()))?
        .to_string();

    Ok(Match { reference, score })
}
