//! Results view abstraction
//!
//! The widget only ever replaces the full child list of the results
//! container, so any UI with a list primitive can host it.

use crate::utils::{RESULT_SEPARATOR, SEARCH_RESULTS_ID};

/// One child of the results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    /// A matched document: title linking to its url, then its description
    Link {
        href: String,
        label: String,
        description: String,
    },
    /// The single entry shown when a query matches nothing
    Placeholder { text: String },
}

impl ListEntry {
    /// Render as an HTML `<li>`, escaping every interpolated value
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            ListEntry::Link {
                href,
                label,
                description,
            } => format!(
                "<li><a href=\"{}\">{}</a>{}{}</li>",
                html_escape::encode_double_quoted_attribute(href),
                html_escape::encode_text(label),
                RESULT_SEPARATOR,
                html_escape::encode_text(description),
            ),
            ListEntry::Placeholder { text } => {
                format!("<li>{}</li>", html_escape::encode_text(text))
            }
        }
    }

    /// Visible text of the entry, as a user would read it
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            ListEntry::Link {
                label, description, ..
            } => format!("{label}{RESULT_SEPARATOR}{description}"),
            ListEntry::Placeholder { text } => text.clone(),
        }
    }
}

/// A container whose children the widget replaces wholesale
pub trait ResultsView {
    /// Remove every child
    fn clear(&mut self);

    /// Replace every child with `entries`, in order
    fn replace_entries(&mut self, entries: Vec<ListEntry>);

    /// Current children
    fn entries(&self) -> &[ListEntry];
}

/// In-memory results container rendered as an HTML list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlResultsView {
    id: String,
    entries: Vec<ListEntry>,
}

impl HtmlResultsView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Container using the default `search-results` id
    #[must_use]
    pub fn search_results() -> Self {
        Self::new(SEARCH_RESULTS_ID)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Children as HTML, the equivalent of the container's `innerHTML`
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.entries.iter().map(ListEntry::to_html).collect()
    }

    /// The whole container, `<ul id="...">` included
    #[must_use]
    pub fn outer_html(&self) -> String {
        format!(
            "<ul id=\"{}\">{}</ul>",
            html_escape::encode_double_quoted_attribute(&self.id),
            self.inner_html()
        )
    }
}

impl ResultsView for HtmlResultsView {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn replace_entries(&mut self, entries: Vec<ListEntry>) {
        self.entries = entries;
    }

    fn entries(&self) -> &[ListEntry] {
        &self.entries
    }
}
