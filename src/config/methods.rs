//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::WidgetConfigBuilder;

impl<State> WidgetConfigBuilder<State> {
    /// Path of the document list below the site root
    ///
    /// Only consulted for `site_url` sources. Defaults to `/search.json`.
    #[must_use]
    pub fn data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    #[must_use]
    pub fn results_element_id(mut self, id: impl Into<String>) -> Self {
        self.results_element_id = id.into();
        self
    }

    /// Maximum number of entries rendered per query (default: 3)
    ///
    /// Zero is rejected by `build()`.
    #[must_use]
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    #[must_use]
    pub fn no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    /// Set the tantivy writer memory budget in bytes
    ///
    /// Tantivy rejects budgets below 15MB per indexing thread, so `build()`
    /// does too.
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_sitesearch::config::WidgetConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = WidgetConfig::builder()
    ///     .data_file("public/search.json")
    ///     .index_memory_limit(100_000_000)
    ///     .build()?;
    /// assert_eq!(config.index_memory_limit(), 100_000_000);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn index_memory_limit(mut self, bytes: usize) -> Self {
        self.index_memory_limit = bytes;
        self
    }

    /// Enable or disable English stemming (enabled by default)
    #[must_use]
    pub fn stemming(mut self, enabled: bool) -> Self {
        self.stemming = enabled;
        self
    }
}
