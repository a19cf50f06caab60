//! Configuration module for the search widget
//!
//! This module provides the `WidgetConfig` struct and its type-safe builder
//! for configuring the widget with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{WidgetConfigBuilder, WithSource};
pub use types::{DataSource, WidgetConfig};
