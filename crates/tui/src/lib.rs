//! Interactive terminal widget for viewing a generated code artifact.
//!
//! The widget presents a named artifact with two switchable read-only views:
//! a rendered preview and a syntax-highlighted source listing. Rendering of
//! both bodies is delegated to the trait seams in `arv-render-api`; this
//! crate owns only view selection, layout, and the terminal event loop.

pub mod components;
mod config;
/// Syntax highlighting and ANSI-to-span conversion utilities.
pub mod highlight;
mod runtime;
pub mod style;
mod view;

#[cfg(test)]
mod snapshot_tests;

pub use config::ViewLabels;
pub use runtime::run;
pub use view::{ArtifactView, ViewSelection};

pub use crate::components::{ScrollMetrics, point_in_rect};
pub use crate::highlight::{HighlightAssets, HighlightRequest, highlight_source};
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
