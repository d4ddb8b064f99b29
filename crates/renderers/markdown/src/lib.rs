//! Markdown rendering for terminal display.
//!
//! Converts markdown into styled ratatui text for the viewer's read-only
//! bodies. Fenced code blocks are routed through the bat-based highlighter
//! with the fence's language tag; prose constructs get simple styling.

use arv_render_api::{SourceRenderer, TextFormatter};
use arv_tui::highlight::{HighlightAssets, HighlightRequest, highlight_source};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use serde_json::Value;

/// Renders markdown into styled terminal text.
///
/// One instance holds the highlighting assets and is reused for every
/// render; construction is the expensive part.
pub struct MarkdownRenderer {
    assets: HighlightAssets,
    bat_theme: Option<String>,
    max_code_lines: usize,
}

impl MarkdownRenderer {
    /// Build a renderer on top of already-loaded highlighting assets.
    #[must_use]
    pub fn new(assets: HighlightAssets) -> Self {
        Self {
            assets,
            bat_theme: None,
            max_code_lines: 4096,
        }
    }

    /// Use a specific bat theme for fenced code blocks.
    #[must_use]
    pub fn with_bat_theme(mut self, theme: impl Into<String>) -> Self {
        self.bat_theme = Some(theme.into());
        self
    }

    /// Cap the number of lines rendered per fenced code block.
    #[must_use]
    pub fn with_max_code_lines(mut self, max: usize) -> Self {
        self.max_code_lines = max;
        self
    }

    /// Render markdown into styled lines.
    pub fn render(&self, text: &str) -> Text<'static> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(text, options);

        let mut lines: Vec<Line<'static>> = vec![Line::default()];
        let mut style_stack: Vec<Style> = vec![Style::default()];
        let mut code_block: Option<CodeBlock> = None;
        let mut list_stack: Vec<Option<u64>> = Vec::new();

        for event in parser {
            match event {
                Event::Start(tag) => match tag {
                    Tag::Strong => push_style(&mut style_stack, |s| s.add_modifier(Modifier::BOLD)),
                    Tag::Emphasis => {
                        push_style(&mut style_stack, |s| s.add_modifier(Modifier::ITALIC));
                    }
                    Tag::Strikethrough => {
                        push_style(&mut style_stack, |s| s.add_modifier(Modifier::CROSSED_OUT));
                    }
                    Tag::Heading { .. } => {
                        start_block(&mut lines);
                        push_style(&mut style_stack, |s| {
                            s.add_modifier(Modifier::BOLD).fg(Color::Cyan)
                        });
                    }
                    Tag::Link { .. } => {
                        push_style(&mut style_stack, |s| {
                            s.add_modifier(Modifier::UNDERLINED).fg(Color::Cyan)
                        });
                    }
                    Tag::CodeBlock(kind) => {
                        start_block(&mut lines);
                        let language = match kind {
                            CodeBlockKind::Fenced(lang) => {
                                let lang = lang.trim().to_string();
                                (!lang.is_empty()).then_some(lang)
                            }
                            CodeBlockKind::Indented => None,
                        };
                        code_block = Some(CodeBlock {
                            language,
                            content: String::new(),
                        });
                    }
                    Tag::List(start) => {
                        list_stack.push(start);
                    }
                    Tag::Item => {
                        start_block(&mut lines);
                        let marker = match list_stack.last_mut() {
                            Some(Some(index)) => {
                                let marker = format!("{index}. ");
                                *index += 1;
                                marker
                            }
                            _ => "• ".to_string(),
                        };
                        push_span(&mut lines, marker, Style::default());
                    }
                    Tag::Paragraph => start_block(&mut lines),
                    _ => {}
                },
                Event::End(tag_end) => match tag_end {
                    TagEnd::Strong
                    | TagEnd::Emphasis
                    | TagEnd::Strikethrough
                    | TagEnd::Heading(_)
                    | TagEnd::Link => {
                        style_stack.pop();
                    }
                    TagEnd::CodeBlock => {
                        if let Some(block) = code_block.take() {
                            // The current line is empty; replace it with the block.
                            if lines.last().is_some_and(|line| line.spans.is_empty()) {
                                lines.pop();
                            }
                            lines.extend(self.highlight_block(&block));
                        }
                        lines.push(Line::default());
                    }
                    TagEnd::Paragraph => lines.push(Line::default()),
                    TagEnd::List(_) => {
                        list_stack.pop();
                    }
                    _ => {}
                },
                Event::Text(text) => {
                    if let Some(block) = code_block.as_mut() {
                        block.content.push_str(&text);
                    } else {
                        let style = *style_stack.last().unwrap_or(&Style::default());
                        for (i, part) in text.split('\n').enumerate() {
                            if i > 0 {
                                lines.push(Line::default());
                            }
                            if !part.is_empty() {
                                push_span(&mut lines, part.to_string(), style);
                            }
                        }
                    }
                }
                Event::Code(code) => {
                    let style = Style::default().fg(Color::Yellow);
                    push_span(&mut lines, format!("`{code}`"), style);
                }
                Event::SoftBreak => push_span(&mut lines, " ".to_string(), Style::default()),
                Event::HardBreak => lines.push(Line::default()),
                Event::Rule => {
                    lines.push(Line::default());
                    push_span(
                        &mut lines,
                        "─".repeat(40),
                        Style::default().fg(Color::DarkGray),
                    );
                    lines.push(Line::default());
                }
                _ => {}
            }
        }

        // Drop trailing blank lines.
        while lines.last().is_some_and(|line| line.spans.is_empty()) {
            lines.pop();
        }

        Text::from(lines)
    }

    fn highlight_block(&self, block: &CodeBlock) -> Vec<Line<'static>> {
        let request = HighlightRequest {
            language: block.language.as_deref(),
            bat_theme: self.bat_theme.as_deref(),
            max_lines: self.max_code_lines,
            line_numbers: true,
        };
        highlight_source(&block.content, request, &self.assets)
    }
}

struct CodeBlock {
    language: Option<String>,
    content: String,
}

fn push_style(stack: &mut Vec<Style>, apply: impl FnOnce(Style) -> Style) {
    let current = *stack.last().unwrap_or(&Style::default());
    stack.push(apply(current));
}

fn push_span(lines: &mut Vec<Line<'static>>, text: String, style: Style) {
    if let Some(line) = lines.last_mut() {
        line.spans.push(Span::styled(text, style));
    }
}

/// Start a new block: ensure the current line is empty before writing.
fn start_block(lines: &mut Vec<Line<'static>>) {
    if lines.last().is_some_and(|line| !line.spans.is_empty()) {
        lines.push(Line::default());
    }
}

impl TextFormatter for MarkdownRenderer {
    fn format(&self, text: &str) -> Text<'static> {
        self.render(text)
    }
}

impl SourceRenderer for MarkdownRenderer {
    fn render_preview(&self, source: &str, _props: &Value) -> Text<'static> {
        self.render(source)
    }
}
