//! Shared interfaces between the `arv` widget and its renderers.
//!
//! The widget itself is deliberately thin: it owns no parsing, highlighting,
//! or layout beyond arranging two switchable bodies. Everything that turns an
//! artifact's source into styled terminal text lives behind the traits in
//! this crate, so hosts can swap renderers without touching the widget.

pub mod artifact;
pub mod error;
pub mod fence;
pub mod registry;
pub mod render;

pub use artifact::Artifact;
pub use error::RendererRegistryError;
pub use fence::{SOURCE_FENCE_TAG, fenced};
pub use registry::{RegisteredRenderer, RendererRegistry};
pub use render::{SourceRenderer, TextFormatter};
