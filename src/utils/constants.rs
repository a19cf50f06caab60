//! Shared configuration constants for the site search widget
//!
//! Default values used by the config builder, the renderer and the binary
//! so that the page contract lives in one place.

/// Path of the precomputed document list, relative to the site root
pub const DEFAULT_DATA_PATH: &str = "/search.json";

/// Element id of the container that receives rendered results
pub const SEARCH_RESULTS_ID: &str = "search-results";

/// Maximum number of entries rendered for a single query
pub const MAX_RENDERED_RESULTS: usize = 3;

/// Text of the single placeholder entry shown when a query matches nothing
pub const NO_RESULTS_TEXT: &str = "No results found.";

/// Separator rendered between a result's title link and its description
pub const RESULT_SEPARATOR: &str = " - ";

/// Index writer memory budget: 50MB
///
/// The whole document list is indexed in one commit, so this only needs to
/// hold the in-flight segment. Tantivy refuses budgets below 15MB.
pub const DEFAULT_INDEX_MEMORY_LIMIT: usize = 50_000_000;

/// Smallest writer budget tantivy accepts for a single indexing thread
pub const MIN_INDEX_MEMORY_LIMIT: usize = 15_000_000;
