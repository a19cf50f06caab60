//! Core Tantivy search engine implementation
//!
//! This module provides the `SearchEngine` that owns the in-memory index
//! built from the document list and executes queries against it.

use tantivy::query::QueryParser;
use tantivy::tokenizer::TextAnalyzer;
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy};

use super::errors::{SearchError, SearchResult};
use super::indexer::DocumentIndexer;
use super::query::SearchQueryBuilder;
use super::schema::SearchSchema;
use super::types::{Document, Match};

/// Search engine over an immutable, in-memory Tantivy index
///
/// Built once from the full document list and never modified afterwards.
/// Cloning shares the underlying index.
#[derive(Clone)]
pub struct SearchEngine {
    index: Index,
    schema: SearchSchema,
    reader: IndexReader,
    query_parser: QueryParser,
}

impl SearchEngine {
    /// Build the index over `documents`, adding each exactly once in order
    ///
    /// A single indexing thread keeps document ids in array order, and the
    /// whole list goes out in one commit.
    pub fn build(
        schema: SearchSchema,
        documents: &[Document],
        memory_limit: usize,
    ) -> SearchResult<Self> {
        let start = std::time::Instant::now();

        let index = Index::create_in_ram(schema.schema.clone());
        schema.register_tokenizers(index.tokenizers());

        let mut writer: IndexWriter = index
            .writer_with_num_threads(1, memory_limit)
            .map_err(|e| {
                SearchError::IndexInitialization(format!(
                    "Failed to create index writer with {}MB limit: {e}",
                    memory_limit / 1_000_000
                ))
            })?;

        let indexed = DocumentIndexer::new(&schema).index_all(&mut writer, documents)?;

        writer
            .commit()
            .map_err(|e| SearchError::IndexInitialization(format!("Index commit failed: {e}")))?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| {
                SearchError::IndexInitialization(format!("Failed to create index reader: {e}"))
            })?;

        // Terms are OR-ed across every searchable field by default.
        let query_parser = QueryParser::for_index(&index, schema.searchable_fields());

        tracing::info!(
            documents = indexed,
            duration_ms = start.elapsed().as_millis(),
            "Search index built"
        );

        Ok(SearchEngine {
            index,
            schema,
            reader,
            query_parser,
        })
    }

    /// Get a reference to the search schema
    #[must_use]
    pub fn schema(&self) -> &SearchSchema {
        &self.schema
    }

    /// Get the Tantivy index
    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Get the index reader
    #[must_use]
    pub fn reader(&self) -> &IndexReader {
        &self.reader
    }

    /// Get the query parser
    #[must_use]
    pub fn query_parser(&self) -> &QueryParser {
        &self.query_parser
    }

    /// Get the text analyzer (tokenizer) for a specific field
    ///
    /// Returns None if the field is not an indexed text field.
    pub fn get_text_analyzer(&self, field: tantivy::schema::Field) -> Option<TextAnalyzer> {
        use tantivy::schema::FieldType;

        let field_entry = self.schema.schema.get_field_entry(field);

        if let FieldType::Str(text_options) = field_entry.field_type()
            && let Some(indexing_options) = text_options.get_indexing_options()
        {
            let tokenizer_name = indexing_options.tokenizer();
            return self.index.tokenizers().get(tokenizer_name);
        }
        None
    }

    /// Run a free-text query and return every match in ranking order
    pub fn search(&self, query: &str) -> SearchResult<Vec<Match>> {
        SearchQueryBuilder::new(query).execute(self)
    }

    /// Get index statistics
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let searcher = self.reader.searcher();
        IndexStats {
            num_documents: searcher.num_docs() as usize,
            num_segments: searcher.segment_readers().len(),
        }
    }
}

/// Index statistics information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub num_documents: usize,
    pub num_segments: usize,
}
