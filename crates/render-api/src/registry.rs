use std::sync::Arc;

use crate::error::RendererRegistryError;
use crate::render::SourceRenderer;

/// A preview renderer together with its registered identifier.
#[derive(Clone)]
pub struct RegisteredRenderer {
    id: String,
    renderer: Arc<dyn SourceRenderer>,
}

impl RegisteredRenderer {
    /// Identifier the renderer was registered under.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The renderer implementation.
    #[must_use]
    pub fn renderer(&self) -> &Arc<dyn SourceRenderer> {
        &self.renderer
    }
}

/// Registry of preview renderers contributed by the host.
///
/// Registration order is preserved; the first registered renderer is the
/// default used when lookup by id misses.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    renderers: Vec<RegisteredRenderer>,
}

impl RendererRegistry {
    /// Create an empty registry without any renderers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer under `id`.
    pub fn register<R>(&mut self, id: impl Into<String>, renderer: R) -> Result<(), RendererRegistryError>
    where
        R: SourceRenderer + 'static,
    {
        let id = id.into();
        if self.renderers.iter().any(|entry| entry.id == id) {
            return Err(RendererRegistryError::DuplicateId { id });
        }
        self.renderers.push(RegisteredRenderer {
            id,
            renderer: Arc::new(renderer),
        });
        Ok(())
    }

    /// Lookup a renderer by its registered identifier.
    pub fn get(&self, id: &str) -> Option<Arc<dyn SourceRenderer>> {
        self.renderers
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| Arc::clone(&entry.renderer))
    }

    /// The fallback renderer: the first one registered.
    pub fn default_renderer(&self) -> Option<Arc<dyn SourceRenderer>> {
        self.renderers
            .first()
            .map(|entry| Arc::clone(&entry.renderer))
    }

    /// Resolve `id` to a renderer, falling back to the default when the id is
    /// unknown or absent.
    pub fn resolve(&self, id: Option<&str>) -> Option<Arc<dyn SourceRenderer>> {
        id.and_then(|id| self.get(id))
            .or_else(|| self.default_renderer())
    }

    /// Iterate over all registered renderers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRenderer> {
        self.renderers.iter()
    }

    /// Identifiers of all registered renderers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.renderers.iter().map(|entry| entry.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Text;
    use serde_json::Value;

    struct Stub(&'static str);

    impl SourceRenderer for Stub {
        fn render_preview(&self, _source: &str, _props: &Value) -> Text<'static> {
            Text::raw(self.0)
        }
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = RendererRegistry::new();
        registry.register("markdown", Stub("a")).expect("first");
        let err = registry.register("markdown", Stub("b")).unwrap_err();
        assert_eq!(
            err,
            RendererRegistryError::DuplicateId {
                id: "markdown".into()
            }
        );
    }

    #[test]
    fn first_registered_is_default() {
        let mut registry = RendererRegistry::new();
        registry.register("one", Stub("one")).expect("register");
        registry.register("two", Stub("two")).expect("register");

        let default = registry.default_renderer().expect("default");
        let rendered = default.render_preview("", &Value::Null);
        assert_eq!(rendered, Text::raw("one"));
    }

    #[test]
    fn resolve_falls_back_to_default_on_unknown_id() {
        let mut registry = RendererRegistry::new();
        registry.register("one", Stub("one")).expect("register");

        let renderer = registry.resolve(Some("missing")).expect("fallback");
        assert_eq!(renderer.render_preview("", &Value::Null), Text::raw("one"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn empty_registry_resolves_to_none() {
        let registry = RendererRegistry::new();
        assert!(registry.resolve(None).is_none());
    }
}
