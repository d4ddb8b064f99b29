//! Built-in preview renderer.
//!
//! Terminal hosts cannot execute a generated UI component, so the default
//! preview shows the artifact's most useful visual form instead: markdown
//! sources render as formatted text, everything else as highlighted source
//! without the listing gutter. Hosts with a real component runtime register
//! their own [`SourceRenderer`] and bypass this crate entirely.

use arv_markdown::MarkdownRenderer;
use arv_render_api::SourceRenderer;
use arv_tui::highlight::{HighlightAssets, HighlightRequest, highlight_source};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use serde_json::Value;

/// Language assumed when the props bag carries no hint. Generated artifacts
/// are UI component sources.
const DEFAULT_LANGUAGE: &str = "jsx";

/// Renders the preview body for an artifact.
pub struct PreviewRenderer {
    markdown: MarkdownRenderer,
    assets: HighlightAssets,
    bat_theme: Option<String>,
    max_lines: usize,
}

impl PreviewRenderer {
    /// Build a renderer on top of already-loaded highlighting assets.
    #[must_use]
    pub fn new(assets: HighlightAssets) -> Self {
        Self {
            markdown: MarkdownRenderer::new(assets.clone()),
            assets,
            bat_theme: None,
            max_lines: 4096,
        }
    }

    /// Use a specific bat theme for highlighted previews.
    #[must_use]
    pub fn with_bat_theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        self.markdown = self.markdown.with_bat_theme(theme.clone());
        self.bat_theme = Some(theme);
        self
    }

    /// Cap the number of preview lines.
    #[must_use]
    pub fn with_max_lines(mut self, max: usize) -> Self {
        self.max_lines = max;
        self
    }
}

impl SourceRenderer for PreviewRenderer {
    fn render_preview(&self, source: &str, props: &Value) -> Text<'static> {
        if source.trim().is_empty() {
            return placeholder("Nothing to preview");
        }

        let language = language_hint(props);
        if language.is_some_and(is_markdown) {
            return self.markdown.render(source);
        }

        let request = HighlightRequest {
            language: language.or(Some(DEFAULT_LANGUAGE)),
            bat_theme: self.bat_theme.as_deref(),
            max_lines: self.max_lines,
            line_numbers: false,
        };
        Text::from(highlight_source(source, request, &self.assets))
    }
}

/// The `language` string carried in the props bag, if any.
#[must_use]
pub fn language_hint(props: &Value) -> Option<&str> {
    props.get("language").and_then(Value::as_str)
}

fn is_markdown(language: &str) -> bool {
    matches!(language.to_ascii_lowercase().as_str(), "markdown" | "md")
}

fn placeholder(message: &str) -> Text<'static> {
    Text::from(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> PreviewRenderer {
        PreviewRenderer::new(HighlightAssets::load())
    }

    fn full_text(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_source_renders_a_placeholder() {
        let text = renderer().render_preview("", &Value::Null);
        assert_eq!(full_text(&text), "Nothing to preview");
    }

    #[test]
    fn whitespace_only_source_counts_as_empty() {
        let text = renderer().render_preview("  \n\t\n", &json!({}));
        assert_eq!(full_text(&text), "Nothing to preview");
    }

    #[test]
    fn markdown_language_hint_routes_through_the_markdown_renderer() {
        let props = json!({"language": "markdown"});
        let text = renderer().render_preview("# Heading", &props);
        let heading = &text.lines[0].spans[0];
        assert_eq!(heading.content, "Heading");
        assert!(heading.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn source_without_a_hint_still_renders_every_line() {
        let text = renderer().render_preview("const a = 1;\nconst b = 2;", &Value::Null);
        assert_eq!(text.lines.len(), 2);
        let rendered = full_text(&text);
        assert!(rendered.contains("const a"), "{rendered}");
    }

    #[test]
    fn language_hint_reads_only_string_values() {
        assert_eq!(language_hint(&json!({"language": "tsx"})), Some("tsx"));
        assert_eq!(language_hint(&json!({"language": 3})), None);
        assert_eq!(language_hint(&Value::Null), None);
        assert_eq!(language_hint(&json!({})), None);
    }
}
