//! Input listener: maps raw input changes to index queries and renders

use super::renderer::Renderer;
use super::view::ResultsView;
use crate::search::engine::SearchEngine;
use crate::search::errors::SearchResult;
use crate::search::query::SearchQueryBuilder;
use crate::search::types::DocumentSet;

/// Whether the input currently holds a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListenerState {
    /// Trimmed input is empty; the results container is empty
    #[default]
    Idle,
    /// Trimmed input is non-empty and its results are on display
    Active { query: String },
}

/// Handles input-change events against a ready index
#[derive(Clone)]
pub struct InputListener {
    engine: SearchEngine,
    documents: DocumentSet,
    renderer: Renderer,
    state: ListenerState,
}

impl InputListener {
    pub fn new(engine: SearchEngine, documents: DocumentSet, renderer: Renderer) -> Self {
        Self {
            engine,
            documents,
            renderer,
            state: ListenerState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ListenerState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    #[must_use]
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    /// Handle one input-change event carrying the input's full value
    ///
    /// Empty (after trimming) clears the view. Anything else is queried and
    /// rendered. A query error is returned and the view is left as it was.
    pub fn on_input(&mut self, raw: &str, view: &mut dyn ResultsView) -> SearchResult<()> {
        let query = raw.trim();
        if query.is_empty() {
            self.state = ListenerState::Idle;
            view.clear();
            return Ok(());
        }

        // Only the rendered prefix of the ranking is ever shown.
        let matches = SearchQueryBuilder::new(query)
            .limit(self.renderer.max_results())
            .execute(&self.engine)?;

        tracing::debug!(query = %query, matches = matches.len(), "Rendering matches");
        self.renderer.render(&matches, &self.documents, view)?;

        self.state = ListenerState::Active {
            query: query.to_string(),
        };
        Ok(())
    }
}
