use ratatui::text::Text;
use serde_json::Value;

/// Produces the preview body for an artifact.
///
/// Implementations receive the artifact's source and properties exactly as
/// the host supplied them. They are expected to degrade gracefully: a source
/// the renderer cannot make sense of should come back as placeholder text,
/// not an error — the widget has no failure surface of its own.
pub trait SourceRenderer {
    /// Render a visual preview of `source` into styled terminal text.
    fn render_preview(&self, source: &str, props: &Value) -> Text<'static>;
}

/// Produces a read-only styled body from text containing fenced-code markup.
pub trait TextFormatter {
    /// Format `text` into styled terminal text.
    fn format(&self, text: &str) -> Text<'static>;
}

impl<T: SourceRenderer + ?Sized> SourceRenderer for &T {
    fn render_preview(&self, source: &str, props: &Value) -> Text<'static> {
        (**self).render_preview(source, props)
    }
}

impl<T: TextFormatter + ?Sized> TextFormatter for &T {
    fn format(&self, text: &str) -> Text<'static> {
        (**self).format(text)
    }
}
