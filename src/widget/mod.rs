//! The search widget: load, index, then answer input events
//!
//! `SearchWidget` makes the page lifecycle explicit. It starts `Loading`,
//! becomes `Ready` once the document list is fetched and indexed, or
//! `Failed` if either step errors. Input arriving while not ready is
//! rejected with `SearchError::IndexNotReady` and has no effect.

pub mod listener;
pub mod renderer;
pub mod view;

pub use listener::{InputListener, ListenerState};
pub use renderer::Renderer;
pub use view::{HtmlResultsView, ListEntry, ResultsView};

use reqwest::Client;

use crate::config::WidgetConfig;
use crate::loader::load_documents;
use crate::search::errors::{SearchError, SearchResult};
use crate::search::types::{Document, DocumentSet};
use crate::search::{SearchEngine, build_index};

/// Lifecycle of the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Loading,
    Ready,
    /// Loading or indexing failed; the widget stays inert
    Failed(String),
}

/// Search widget bound to one results container
pub struct SearchWidget {
    config: WidgetConfig,
    client: Client,
    state: WidgetState,
    listener: Option<InputListener>,
}

impl SearchWidget {
    /// Create a widget in the `Loading` state
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a widget that fetches with the given HTTP client
    #[must_use]
    pub fn with_client(config: WidgetConfig, client: Client) -> Self {
        Self {
            config,
            client,
            state: WidgetState::Loading,
            listener: None,
        }
    }

    /// Create a ready widget from documents the host already holds
    pub fn from_documents(config: WidgetConfig, documents: Vec<Document>) -> SearchResult<Self> {
        let mut widget = Self::new(config);
        let engine = build_index(&widget.config, &documents)?;
        widget.become_ready(engine, documents);
        Ok(widget)
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == WidgetState::Ready
    }

    #[must_use]
    pub fn listener(&self) -> Option<&InputListener> {
        self.listener.as_ref()
    }

    /// Fetch the document list, build the index and empty the view
    ///
    /// Runs once; mounting a ready widget does nothing. Failures move the
    /// widget to `Failed` and are returned.
    pub async fn mount(&mut self, view: &mut dyn ResultsView) -> SearchResult<()> {
        if self.is_ready() {
            tracing::debug!("Search widget already mounted");
            return Ok(());
        }

        self.state = WidgetState::Loading;
        match self.load_and_index().await {
            Ok((engine, documents)) => {
                self.become_ready(engine, documents);
                // No results are shown until the first query.
                view.clear();
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    source = %self.config.source(),
                    error = %e,
                    "Search widget failed to load; input will have no effect"
                );
                self.state = WidgetState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    async fn load_and_index(&self) -> SearchResult<(SearchEngine, Vec<Document>)> {
        let documents = load_documents(self.config.source(), &self.client).await?;
        let config = self.config.clone();

        // Tantivy's writer blocks; keep it off the async workers.
        tokio::task::spawn_blocking(move || -> SearchResult<(SearchEngine, Vec<Document>)> {
            let engine = build_index(&config, &documents)?;
            Ok((engine, documents))
        })
        .await
        .map_err(|e| SearchError::Other(format!("Index build task panicked: {e}")))?
    }

    fn become_ready(&mut self, engine: SearchEngine, documents: Vec<Document>) {
        let renderer = Renderer::from_config(&self.config);
        self.listener = Some(InputListener::new(
            engine,
            DocumentSet::new(documents),
            renderer,
        ));
        self.state = WidgetState::Ready;
    }

    /// Handle one input-change event
    pub fn handle_input(&mut self, raw: &str, view: &mut dyn ResultsView) -> SearchResult<()> {
        match self.listener.as_mut() {
            Some(listener) => listener.on_input(raw, view),
            None => Err(SearchError::IndexNotReady),
        }
    }
}
