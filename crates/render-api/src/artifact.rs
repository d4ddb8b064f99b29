use serde::Deserialize;
use serde_json::Value;

/// A named unit of generated source code plus an opaque properties bag.
///
/// Hosts construct one per viewer instance and hand it to the widget; the
/// widget never mutates it. `props` is meaningful only to the preview
/// renderer and is forwarded to it untouched — a host that has no extra
/// properties passes [`Value::Null`].
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Display name shown in the viewer header.
    pub name: String,
    /// Raw source text of the artifact. May be empty.
    #[serde(alias = "sourceCode")]
    pub source_code: String,
    /// Opaque structured properties forwarded to the preview renderer.
    #[serde(default)]
    pub props: Value,
}

impl Artifact {
    /// Construct an artifact without renderer properties.
    pub fn new(name: impl Into<String>, source_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_code: source_code.into(),
            props: Value::Null,
        }
    }

    /// Attach a properties bag to the artifact.
    #[must_use]
    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }
}
