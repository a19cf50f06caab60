//! Core configuration types for the search widget
//!
//! This module contains the main `WidgetConfig` struct and the `DataSource`
//! describing where the document list is fetched from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Location of the precomputed document list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Fetched with a single HTTP GET
    Url(Url),
    /// Read from disk, for hosts serving the site locally
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Main configuration struct for the search widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub(crate) source: DataSource,

    /// Id of the container element whose children are replaced on render
    pub(crate) results_element_id: String,

    /// Maximum number of entries rendered per query
    ///
    /// **INVARIANT:** Always at least 1 (checked in builder).
    pub(crate) max_results: usize,

    /// Text of the placeholder entry rendered for an empty match list
    pub(crate) no_results_text: String,

    /// Memory budget in bytes handed to the tantivy index writer
    ///
    /// **INVARIANT:** At least `MIN_INDEX_MEMORY_LIMIT` (checked in builder).
    pub(crate) index_memory_limit: usize,

    /// Apply English stemming to indexed and queried text
    pub(crate) stemming: bool,
}
