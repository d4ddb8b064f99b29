use thiserror::Error;

/// Errors that can occur when mutating the [`RendererRegistry`](crate::RendererRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RendererRegistryError {
    /// A renderer attempted to register an identifier that already exists in
    /// the registry.
    #[error("renderer id '{id}' is already registered")]
    DuplicateId { id: String },
}
