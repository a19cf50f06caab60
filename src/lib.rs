pub mod config;
pub mod loader;
pub mod search;
pub mod utils;
pub mod widget;

pub use config::{DataSource, WidgetConfig};
pub use loader::{load_documents, parse_documents};
pub use search::{
    Document, DocumentSet, Match, SearchEngine, SearchError, SearchResult, SearchResults, Tags,
};
pub use widget::{
    HtmlResultsView, InputListener, ListEntry, ListenerState, Renderer, ResultsView, SearchWidget,
    WidgetState,
};

/// Load, index and mount a widget against `view` in one call
pub async fn mount(config: WidgetConfig, view: &mut dyn ResultsView) -> SearchResult<SearchWidget> {
    let mut widget = SearchWidget::new(config);
    widget.mount(view).await?;
    Ok(widget)
}
