//! Error types for search operations
//!
//! This module defines the error taxonomy shared by the loader, the tantivy
//! index and the widget lifecycle.

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Error types for search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Fetching the document list failed
    #[error("Failed to fetch document list from {source_desc}: {message}")]
    Fetch {
        source_desc: String,
        message: String,
    },

    /// The document list body is not a JSON array of documents
    #[error("Failed to parse document list: {0}")]
    Parse(#[from] serde_json::Error),

    /// Index initialization failed
    #[error("Failed to initialize search index: {0}")]
    IndexInitialization(String),

    /// Schema validation failed
    #[error("Search schema is invalid: {0}")]
    SchemaValidation(#[from] super::schema::SchemaError),

    /// Query parsing failed
    #[error("Invalid search query: {0}")]
    QueryParsing(String),

    /// Search execution failed
    #[error("Search execution failed: {0}")]
    SearchExecution(String),

    /// Indexing operation failed
    #[error("Indexing failed for document {doc_id}: {message}")]
    IndexingFailed { doc_id: String, message: String },

    /// A match references a url that no loaded document has
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Input arrived before the index finished building
    #[error("Search index is not ready")]
    IndexNotReady,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for SearchError {
    fn from(error: anyhow::Error) -> Self {
        SearchError::Other(error.to_string())
    }
}

impl SearchError {
    /// Check if the error happened while obtaining the document list
    ///
    /// Load errors leave the widget permanently unready; nothing retries them.
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            SearchError::Fetch { .. } | SearchError::Parse(_) | SearchError::Io(_)
        )
    }

    /// Check if the error was caused by the query text rather than the index
    #[must_use]
    pub fn is_query_error(&self) -> bool {
        matches!(self, SearchError::QueryParsing(_))
    }
}

/// Helper macro for logging search operations with performance metrics
#[macro_export]
macro_rules! log_search_operation {
    ($op:expr, $query:expr) => {{
        let start = std::time::Instant::now();
        let result = $op;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::debug!(
                    query = %$query,
                    duration_ms = duration.as_millis(),
                    "Search operation completed successfully"
                );
            }
            Err(e) => {
                tracing::warn!(
                    query = %$query,
                    duration_ms = duration.as_millis(),
                    error = %e,
                    "Search operation failed"
                );
            }
        }

        result
    }};
}
