//! Rendering of ranked matches into the results view

use super::view::{ListEntry, ResultsView};
use crate::config::WidgetConfig;
use crate::search::errors::{SearchError, SearchResult};
use crate::search::types::{DocumentSet, Match};
use crate::utils::{MAX_RENDERED_RESULTS, NO_RESULTS_TEXT};

/// Turns a match list into list entries and pushes them to a view
#[derive(Debug, Clone)]
pub struct Renderer {
    max_results: usize,
    no_results_text: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(MAX_RENDERED_RESULTS, NO_RESULTS_TEXT)
    }
}

impl Renderer {
    pub fn new(max_results: usize, no_results_text: impl Into<String>) -> Self {
        Self {
            max_results,
            no_results_text: no_results_text.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.max_results(), config.no_results_text())
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Build the entries for `matches`
    ///
    /// An empty match list yields exactly one placeholder. Otherwise the
    /// first `max_results` matches are resolved against `documents`; a
    /// reference with no document is an error.
    pub fn entries(&self, matches: &[Match], documents: &DocumentSet) -> SearchResult<Vec<ListEntry>> {
        if matches.is_empty() {
            return Ok(vec![ListEntry::Placeholder {
                text: self.no_results_text.clone(),
            }]);
        }

        matches
            .iter()
            .take(self.max_results)
            .map(|hit| {
                let doc = documents
                    .find(&hit.reference)
                    .ok_or_else(|| SearchError::DocumentNotFound(hit.reference.clone()))?;
                Ok::<_, SearchError>(ListEntry::Link {
                    href: doc.url.clone(),
                    label: doc.title.clone(),
                    description: doc.description.clone(),
                })
            })
            .collect()
    }

    /// Replace the view's children with the entries for `matches`
    ///
    /// On error the view keeps its previous children.
    pub fn render(
        &self,
        matches: &[Match],
        documents: &DocumentSet,
        view: &mut dyn ResultsView,
    ) -> SearchResult<()> {
        let entries = self.entries(matches, documents)?;
        view.replace_entries(entries);
        Ok(())
    }
}
