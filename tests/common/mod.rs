//! Test utilities and helper functions for the sitesearch test suite

use anyhow::Result;
use kodegen_tools_sitesearch::{Document, HtmlResultsView, SearchWidget, Tags, WidgetConfig};
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds a document with a single string tag
#[allow(dead_code)]
pub fn doc(url: &str, title: &str, description: &str, tags: &str) -> Document {
    Document {
        url: url.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: Tags::One(tags.to_string()),
    }
}

/// The two-document site used throughout the examples
#[allow(dead_code)]
pub fn guide_documents() -> Vec<Document> {
    vec![
        doc("/a", "Alpha Guide", "intro", "basics"),
        doc("/b", "Beta Guide", "advanced", "advanced"),
    ]
}

/// A larger site with several documents about the same topic
#[allow(dead_code)]
pub fn rust_documents() -> Vec<Document> {
    vec![
        doc("/rust/ownership", "Ownership in Rust", "Moves, borrows and lifetimes", "rust"),
        doc("/rust/traits", "Rust Traits", "Shared behaviour for rust types", "rust"),
        doc("/rust/async", "Async Rust", "Futures and executors", "rust async"),
        doc("/rust/macros", "Rust Macros", "Declarative and procedural macros", "rust"),
        doc("/rust/errors", "Error Handling in Rust", "Result, the ? operator and rust error crates", "rust"),
        doc("/go/channels", "Go Channels", "Communicating sequential processes", "go"),
    ]
}

/// Writes `documents` as a JSON array to a temporary file
#[allow(dead_code)]
pub fn write_documents(documents: &[Document]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(serde_json::to_string(documents)?.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// A ready widget over `documents` plus an empty results container
#[allow(dead_code)]
pub fn ready_widget(documents: Vec<Document>) -> Result<(SearchWidget, HtmlResultsView)> {
    let config = WidgetConfig::builder()
        .data_file("unused.json")
        .build()?;
    let widget = SearchWidget::from_documents(config, documents)?;
    Ok((widget, HtmlResultsView::search_results()))
}

/// HTTP client that ignores proxy environment variables, for local mock servers
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client builds")
}
