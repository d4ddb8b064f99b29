//! Core crate exports for building and running the `arv` artifact viewer.
//!
//! The root module primarily re-exports types from the widget and renderer
//! crates so that embedders can configure the viewer without digging through
//! the workspace hierarchy.

pub mod app_dirs;
pub mod logging;

pub use arv_markdown::MarkdownRenderer;
pub use arv_preview::PreviewRenderer;
pub use arv_render_api::{
    Artifact, RendererRegistry, RendererRegistryError, SOURCE_FENCE_TAG, SourceRenderer,
    TextFormatter, fenced,
};
pub use arv_tui::{
    ArtifactView, HighlightAssets, StyleConfig, Theme, ViewLabels, ViewSelection, run,
};
pub use arv_tui::style::{bat_theme, builtin_themes, by_name, default_theme, names as theme_names};
