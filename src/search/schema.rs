//! Tantivy schema for the site document list
//!
//! One raw reference field (`url`) maps hits back to documents; `title`,
//! `description` and `tags` are the searchable text fields.

use std::collections::HashSet;
use tantivy::{
    schema::{Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions},
    tokenizer::{
        Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer, TextAnalyzer,
        TokenizerManager,
    },
};

/// Tokenizer used by every searchable field
pub const SITE_SEARCH_TOKENIZER: &str = "site_search";

/// Tokens longer than this are dropped (URLs pasted into descriptions, hashes)
const MAX_TOKEN_LENGTH: usize = 40;

/// Field names as they appear in the document list
pub const URL_FIELD: &str = "url";
pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const TAGS_FIELD: &str = "tags";

/// Searchable fields, in the order they were declared
pub const SEARCHABLE_FIELDS: [&str; 3] = [TITLE_FIELD, DESCRIPTION_FIELD, TAGS_FIELD];

/// Search schema with the reference field and the three text fields
#[derive(Debug, Clone)]
pub struct SearchSchema {
    pub schema: Schema,
    pub url: Field,
    pub title: Field,
    pub description: Field,
    pub tags: Field,
    stemming: bool,
}

/// Schema builder for flexible configuration and validation
pub struct SearchSchemaBuilder {
    enable_stemming: bool,
}

/// Schema validation errors
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Field '{field}' configuration error: {details}")]
    FieldConfiguration { field: String, details: String },

    #[error("Field '{field}' not found in schema")]
    FieldNotFound { field: String },

    #[error("Incompatible field type for '{field}': expected {expected}, found {found}")]
    IncompatibleFieldType {
        field: String,
        expected: String,
        found: String,
    },
}

impl SearchSchema {
    /// Create schema builder for custom configuration
    #[inline]
    #[must_use]
    pub fn builder() -> SearchSchemaBuilder {
        SearchSchemaBuilder::new()
    }

    /// Schema validation with detailed error reporting
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_required_fields()?;
        self.validate_field_types()?;
        self.validate_indexing_options()?;
        Ok(())
    }

    fn validate_required_fields(&self) -> Result<(), SchemaError> {
        let existing_fields: HashSet<&str> = self
            .schema
            .fields()
            .map(|(_, field_entry)| field_entry.name())
            .collect();

        for field_name in std::iter::once(URL_FIELD).chain(SEARCHABLE_FIELDS) {
            if !existing_fields.contains(field_name) {
                return Err(SchemaError::FieldNotFound {
                    field: field_name.to_string(),
                });
            }
        }

        Ok(())
    }

    fn validate_field_types(&self) -> Result<(), SchemaError> {
        use tantivy::schema::FieldType;

        for (_, field_entry) in self.schema.fields() {
            if !matches!(field_entry.field_type(), FieldType::Str(_)) {
                return Err(SchemaError::IncompatibleFieldType {
                    field: field_entry.name().to_string(),
                    expected: "Text".to_string(),
                    found: format!("{:?}", field_entry.field_type().value_type()),
                });
            }
        }

        Ok(())
    }

    fn validate_indexing_options(&self) -> Result<(), SchemaError> {
        use tantivy::schema::FieldType;

        // The reference must come back out of the index to resolve a hit.
        let url_entry = self.schema.get_field_entry(self.url);
        if let FieldType::Str(options) = url_entry.field_type()
            && (!options.is_stored() || options.get_indexing_options().is_none())
        {
            return Err(SchemaError::FieldConfiguration {
                field: URL_FIELD.to_string(),
                details: "Reference field must be stored and indexed".to_string(),
            });
        }

        for field in [self.title, self.description, self.tags] {
            let entry = self.schema.get_field_entry(field);
            if let FieldType::Str(options) = entry.field_type() {
                match options.get_indexing_options() {
                    Some(indexing) if indexing.index_option().has_positions() => {}
                    _ => {
                        return Err(SchemaError::FieldConfiguration {
                            field: entry.name().to_string(),
                            details: "Searchable field must be indexed with positions".to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Get field by name
    #[inline]
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<Field> {
        self.schema.get_field(name).ok()
    }

    /// Searchable fields, in declaration order
    #[must_use]
    pub fn searchable_fields(&self) -> Vec<Field> {
        vec![self.title, self.description, self.tags]
    }

    /// Register the tokenizers this schema refers to
    pub fn register_tokenizers(&self, tokenizer_manager: &TokenizerManager) {
        let builder = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
            .filter(LowerCaser);

        let analyzer = if self.stemming {
            builder.filter(Stemmer::new(Language::English)).build()
        } else {
            builder.build()
        };

        tokenizer_manager.register(SITE_SEARCH_TOKENIZER, analyzer);
    }
}

impl SearchSchemaBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            enable_stemming: true,
        }
    }

    /// Configure stemming for natural language processing
    #[inline]
    #[must_use]
    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.enable_stemming = enabled;
        self
    }

    /// Build the final schema
    pub fn build(self) -> Result<SearchSchema, SchemaError> {
        let mut schema_builder = Schema::builder();

        // Raw reference: indexed as a single term, never tokenized.
        let url = schema_builder.add_text_field(URL_FIELD, STRING | STORED);

        let text_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(SITE_SEARCH_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let title = schema_builder.add_text_field(TITLE_FIELD, text_options.clone());
        let description = schema_builder.add_text_field(DESCRIPTION_FIELD, text_options.clone());
        let tags = schema_builder.add_text_field(TAGS_FIELD, text_options);

        let search_schema = SearchSchema {
            schema: schema_builder.build(),
            url,
            title,
            description,
            tags,
            stemming: self.enable_stemming,
        };

        search_schema.validate()?;

        Ok(search_schema)
    }
}

impl Default for SearchSchemaBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
