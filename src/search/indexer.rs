//! Conversion of site documents into Tantivy documents

use tantivy::{IndexWriter, TantivyDocument};

use super::errors::{SearchError, SearchResult};
use super::schema::SearchSchema;
use super::types::Document;

/// Adds site documents to an index writer
pub struct DocumentIndexer<'a> {
    schema: &'a SearchSchema,
}

impl<'a> DocumentIndexer<'a> {
    #[inline]
    #[must_use]
    pub fn new(schema: &'a SearchSchema) -> Self {
        Self { schema }
    }

    /// Map one site document onto the schema fields
    ///
    /// Each tag becomes its own value of the `tags` field.
    #[must_use]
    pub fn to_tantivy(&self, doc: &Document) -> TantivyDocument {
        let mut tantivy_doc = TantivyDocument::default();
        tantivy_doc.add_text(self.schema.url, &doc.url);
        tantivy_doc.add_text(self.schema.title, &doc.title);
        tantivy_doc.add_text(self.schema.description, &doc.description);
        for tag in doc.tags.iter() {
            tantivy_doc.add_text(self.schema.tags, tag);
        }
        tantivy_doc
    }

    /// Add every document once, in order, and return how many were added
    pub fn index_all(&self, writer: &mut IndexWriter, documents: &[Document]) -> SearchResult<usize> {
        for doc in documents {
            if doc.url.is_empty() {
                tracing::warn!(title = %doc.title, "Indexing document with an empty url");
            }

            writer
                .add_document(self.to_tantivy(doc))
                .map_err(|e| SearchError::IndexingFailed {
                    doc_id: doc.url.clone(),
                    message: e.to_string(),
                })?;
        }

        tracing::debug!(count = documents.len(), "Documents queued for commit");
        Ok(documents.len())
    }
}
