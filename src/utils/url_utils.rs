//! URL helpers for locating the document list.

use anyhow::Result;
use url::Url;

/// Resolve the document list location against a site root
///
/// `path` is treated like a root-relative `fetch()` argument, so
/// `https://example.com/docs/` + `/search.json` yields
/// `https://example.com/search.json`.
pub fn resolve_data_url(site: &str, path: &str) -> Result<Url> {
    let base = Url::parse(site).map_err(|e| anyhow::anyhow!("Failed to parse site URL: {e}"))?;
    base.join(path)
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{path}' against {site}: {e}"))
}

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match url::Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}
