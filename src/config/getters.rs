//! Getter methods for `WidgetConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `WidgetConfig` instance.

use super::types::{DataSource, WidgetConfig};

impl WidgetConfig {
    #[must_use]
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    #[must_use]
    pub fn results_element_id(&self) -> &str {
        &self.results_element_id
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    #[must_use]
    pub fn no_results_text(&self) -> &str {
        &self.no_results_text
    }

    #[must_use]
    pub fn index_memory_limit(&self) -> usize {
        self.index_memory_limit
    }

    #[must_use]
    pub fn stemming(&self) -> bool {
        self.stemming
    }
}
