//! Full-text search over the site document list using Tantivy
//!
//! The index lives in memory, is built once from the fetched documents and
//! is read-only afterwards.

pub mod engine;
pub mod errors;
pub mod indexer;
pub mod query;
pub mod schema;
pub mod types;

pub use engine::{IndexStats, SearchEngine};
pub use errors::{SearchError, SearchResult};
pub use indexer::DocumentIndexer;
pub use query::{SearchQueryBuilder, SearchQueryType, SearchResults, search};
pub use schema::{SchemaError, SearchSchema, SearchSchemaBuilder};
pub use types::{Document, DocumentSet, Match, Tags};

/// Build the index for a document set using the widget configuration
pub fn build_index(
    config: &crate::config::WidgetConfig,
    documents: &[Document],
) -> SearchResult<SearchEngine> {
    let schema = SearchSchema::builder()
        .with_stemming(config.stemming())
        .build()?;
    SearchEngine::build(schema, documents, config.index_memory_limit())
}
