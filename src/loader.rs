//! Document list loading
//!
//! One fetch of the precomputed document list, parsed as a JSON array.
//! There is no retry, no timeout and no offline fallback: a failure is
//! returned to the caller and the widget never becomes ready.

use reqwest::Client;
use url::Url;

use crate::config::DataSource;
use crate::search::errors::{SearchError, SearchResult};
use crate::search::types::Document;

/// Load and parse the document list from `source`
pub async fn load_documents(source: &DataSource, client: &Client) -> SearchResult<Vec<Document>> {
    let body = match source {
        DataSource::Url(url) => fetch_body(url, client).await?,
        DataSource::File(path) => tokio::fs::read(path).await?,
    };

    let documents = parse_documents(&body)?;
    tracing::info!(
        source = %source,
        documents = documents.len(),
        "Document list loaded"
    );
    Ok(documents)
}

/// Parse a document list body
pub fn parse_documents(body: &[u8]) -> SearchResult<Vec<Document>> {
    Ok(serde_json::from_slice(body)?)
}

async fn fetch_body(url: &Url, client: &Client) -> SearchResult<Vec<u8>> {
    let fetch_error = |e: reqwest::Error| SearchError::Fetch {
        source_desc: url.to_string(),
        message: e.to_string(),
    };

    let response = client
        .get(url.clone())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(fetch_error)?;

    // The body is parsed whatever the status; an error page fails as JSON.
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %url, status = %status, "Document list request was not successful");
    }

    let body = response.bytes().await.map_err(fetch_error)?;
    Ok(body.to_vec())
}
