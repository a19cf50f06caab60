//! Type-safe builder for `WidgetConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that a data source is chosen before building a `WidgetConfig`.

use crate::utils::{
    DEFAULT_DATA_PATH, DEFAULT_INDEX_MEMORY_LIMIT, MAX_RENDERED_RESULTS, MIN_INDEX_MEMORY_LIMIT,
    NO_RESULTS_TEXT, SEARCH_RESULTS_ID, is_valid_url, resolve_data_url,
};
use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::types::{DataSource, WidgetConfig};

// Type states for the builder
pub struct WithSource;

/// Data source as given to the builder, resolved in `build()`
#[derive(Debug, Clone)]
pub(crate) enum PendingSource {
    /// Site root; the document list lives at `DEFAULT_DATA_PATH` below it
    Site(String),
    /// Full URL of the document list
    Url(String),
    File(PathBuf),
}

pub struct WidgetConfigBuilder<State = ()> {
    pub(crate) source: Option<PendingSource>,
    pub(crate) data_path: String,
    pub(crate) results_element_id: String,
    pub(crate) max_results: usize,
    pub(crate) no_results_text: String,
    pub(crate) index_memory_limit: usize,
    pub(crate) stemming: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for WidgetConfigBuilder<()> {
    fn default() -> Self {
        Self {
            source: None,
            data_path: DEFAULT_DATA_PATH.to_string(),
            results_element_id: SEARCH_RESULTS_ID.to_string(),
            max_results: MAX_RENDERED_RESULTS,
            no_results_text: NO_RESULTS_TEXT.to_string(),
            index_memory_limit: DEFAULT_INDEX_MEMORY_LIMIT,
            stemming: true,
            _phantom: PhantomData,
        }
    }
}

impl WidgetConfig {
    /// Create a builder for configuring a `WidgetConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> WidgetConfigBuilder<()> {
        WidgetConfigBuilder::default()
    }
}

impl WidgetConfigBuilder<()> {
    /// Fetch the document list from `<site>/search.json`
    pub fn site_url(self, site: impl Into<String>) -> WidgetConfigBuilder<WithSource> {
        self.with_source(PendingSource::Site(site.into()))
    }

    /// Fetch the document list from an explicit URL
    pub fn data_url(self, url: impl Into<String>) -> WidgetConfigBuilder<WithSource> {
        self.with_source(PendingSource::Url(url.into()))
    }

    /// Read the document list from a local file
    pub fn data_file(self, path: impl Into<PathBuf>) -> WidgetConfigBuilder<WithSource> {
        self.with_source(PendingSource::File(path.into()))
    }

    fn with_source(self, source: PendingSource) -> WidgetConfigBuilder<WithSource> {
        WidgetConfigBuilder {
            source: Some(source),
            data_path: self.data_path,
            results_element_id: self.results_element_id,
            max_results: self.max_results,
            no_results_text: self.no_results_text,
            index_memory_limit: self.index_memory_limit,
            stemming: self.stemming,
            _phantom: PhantomData,
        }
    }
}

// Build method only available once a source is set
impl WidgetConfigBuilder<WithSource> {
    pub fn build(self) -> Result<WidgetConfig> {
        let source = match self.source.ok_or_else(|| anyhow!("data source is required"))? {
            PendingSource::Site(site) => {
                if !is_valid_url(&site) {
                    return Err(anyhow!("Invalid site URL: '{site}'"));
                }
                DataSource::Url(resolve_data_url(&site, &self.data_path)?)
            }
            PendingSource::Url(url) => {
                if !is_valid_url(&url) {
                    return Err(anyhow!("Invalid data URL: '{url}'"));
                }
                DataSource::Url(
                    Url::parse(&url).map_err(|e| anyhow!("Failed to parse data URL: {e}"))?,
                )
            }
            PendingSource::File(path) => DataSource::File(path),
        };

        if self.max_results == 0 {
            return Err(anyhow!("max_results must be at least 1"));
        }

        if self.index_memory_limit < MIN_INDEX_MEMORY_LIMIT {
            return Err(anyhow!(
                "index_memory_limit of {} bytes is below the {} byte minimum",
                self.index_memory_limit,
                MIN_INDEX_MEMORY_LIMIT
            ));
        }

        if self.results_element_id.trim().is_empty() {
            return Err(anyhow!("results element id must not be empty"));
        }

        Ok(WidgetConfig {
            source,
            results_element_id: self.results_element_id,
            max_results: self.max_results,
            no_results_text: self.no_results_text,
            index_memory_limit: self.index_memory_limit,
            stemming: self.stemming,
        })
    }
}
