//! Common types used across the search module
//!
//! This module contains the document records fetched from the site and the
//! ranked matches returned by the index.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

/// Tags attached to a document
///
/// Site generators emit either a single string or a list, and both are
/// indexed as searchable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    One(String),
    Many(Vec<String>),
}

impl Default for Tags {
    fn default() -> Self {
        Tags::Many(Vec::new())
    }
}

impl Tags {
    /// Iterate over the individual tag values
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Tags::One(tag) => std::slice::from_ref(tag),
            Tags::Many(tags) => tags,
        };
        slice.iter().map(String::as_str)
    }
}

/// One searchable record from the precomputed document list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique reference of the document, also its link target
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Tags,
}

/// A ranked hit returned by the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched document's `url`
    pub reference: String,
    pub score: f32,
}

/// Immutable, ordered document list with lookup by reference
///
/// Cloning is cheap; every clone shares the same documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    documents: Arc<[Document]>,
    by_url: Arc<HashMap<String, usize>>,
}

impl DocumentSet {
    pub fn new(documents: Vec<Document>) -> Self {
        let mut by_url = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            // First occurrence wins, matching a front-to-back scan.
            by_url.entry(doc.url.clone()).or_insert(position);
        }

        Self {
            documents: documents.into(),
            by_url: Arc::new(by_url),
        }
    }

    /// Find the first document whose url equals `reference`
    #[must_use]
    pub fn find(&self, reference: &str) -> Option<&Document> {
        self.by_url
            .get(reference)
            .and_then(|&position| self.documents.get(position))
    }
}

impl Deref for DocumentSet {
    type Target = [Document];

    fn deref(&self) -> &Self::Target {
        &self.documents
    }
}

impl From<Vec<Document>> for DocumentSet {
    fn from(documents: Vec<Document>) -> Self {
        Self::new(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_accept_string_or_list() {
        let docs: Vec<Document> = serde_json::from_str(
            r#"[
                {"url": "/a", "title": "A", "description": "a", "tags": "basics"},
                {"url": "/b", "title": "B", "description": "b", "tags": ["rust", "async"]},
                {"url": "/c", "title": "C"}
            ]"#,
        )
        .unwrap();

        assert_eq!(docs[0].tags.iter().collect::<Vec<_>>(), vec!["basics"]);
        assert_eq!(docs[1].tags.iter().collect::<Vec<_>>(), vec!["rust", "async"]);
        assert_eq!(docs[2].tags.iter().count(), 0);
        assert_eq!(docs[2].description, "");
    }

    #[test]
    fn find_returns_first_duplicate() {
        let set = DocumentSet::new(vec![
            Document {
                url: "/dup".into(),
                title: "First".into(),
                description: String::new(),
                tags: Tags::default(),
            },
            Document {
                url: "/dup".into(),
                title: "Second".into(),
                description: String::new(),
                tags: Tags::default(),
            },
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.find("/dup").map(|d| d.title.as_str()), Some("First"));
        assert!(set.find("/missing").is_none());
    }
}
