//! Search query type detection and parsing

use tantivy::query::Query;

use super::query_builders::{
    build_boolean_query, build_field_query, build_fuzzy_query, build_phrase_query,
    build_text_query, field_alias,
};
use crate::search::engine::SearchEngine;
use crate::search::errors::SearchResult;

/// Largest edit distance tantivy's Levenshtein automata support
pub const MAX_FUZZY_DISTANCE: u8 = 2;

/// Search query types for different search patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQueryType {
    /// Simple text search
    Text(String),
    /// Phrase search with quotes
    Phrase(String),
    /// Boolean search with AND/OR/NOT
    Boolean(String),
    /// Field-specific search
    Field { field: String, query: String },
    /// Fuzzy search for typos
    Fuzzy { term: String, distance: u8 },
}

impl SearchQueryType {
    /// Parse a query string to determine its type
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.trim();

        // Check for phrase query (quoted)
        if query.starts_with('"') && query.ends_with('"') && query.len() > 2 {
            return SearchQueryType::Phrase(query[1..query.len() - 1].to_string());
        }

        // Only a known field name before the colon makes a field query;
        // "Rust: A Guide" is plain text.
        if let Some((field, field_query)) = query.split_once(':')
            && field_alias(field.trim()).is_some()
        {
            return SearchQueryType::Field {
                field: field.trim().to_string(),
                query: field_query.trim().to_string(),
            };
        }

        // A single `term~` or `term~N` token is a fuzzy query
        if let Some((term, distance_str)) = query.rsplit_once('~')
            && !term.is_empty()
            && !term.contains(|c: char| c.is_whitespace() || c == '~')
            && distance_str.chars().all(|c| c.is_ascii_digit())
        {
            let distance = if distance_str.is_empty() {
                1
            } else {
                // Digits only, so a parse failure is an overflow
                distance_str
                    .parse::<u64>()
                    .map_or(MAX_FUZZY_DISTANCE, |d| {
                        d.min(u64::from(MAX_FUZZY_DISTANCE)) as u8
                    })
            };

            return SearchQueryType::Fuzzy {
                term: term.to_string(),
                distance,
            };
        }

        // Check for boolean operators
        if query.contains(" AND ") || query.contains(" OR ") || query.contains(" NOT ") {
            return SearchQueryType::Boolean(query.to_string());
        }

        // Default to simple text search
        SearchQueryType::Text(query.to_string())
    }
}

/// Parse a search query string into a Tantivy Query
pub(crate) fn parse_query(engine: &SearchEngine, query_str: &str) -> SearchResult<Box<dyn Query>> {
    match SearchQueryType::parse(query_str) {
        SearchQueryType::Text(text) => build_text_query(engine, &text),
        SearchQueryType::Phrase(phrase) => build_phrase_query(engine, &phrase),
        SearchQueryType::Boolean(boolean_str) => build_boolean_query(engine, &boolean_str),
        SearchQueryType::Field { field, query } => build_field_query(engine, &field, &query),
        SearchQueryType::Fuzzy { term, distance } => build_fuzzy_query(engine, &term, distance),
    }
}
