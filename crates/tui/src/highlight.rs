//! ANSI parsing and bat highlighting utilities.

use std::path::PathBuf;
use std::sync::Arc;

use bat::assets::HighlightingAssets;
use bat::config::{Config, VisibleLines};
use bat::controller::Controller;
use bat::input::Input;
use bat::line_range::LineRanges;
use bat::style::{StyleComponent, StyleComponents};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Loaded syntax and theme definitions for the highlighter.
///
/// Loading is the expensive part of bat initialization; callers create one
/// set of assets and hand out clones, which share the underlying load.
#[derive(Clone)]
pub struct HighlightAssets {
	inner: Arc<HighlightingAssets>,
}

impl HighlightAssets {
	/// Load the syntax and theme set embedded in the bat binary assets.
	#[must_use]
	pub fn load() -> Self {
		Self {
			inner: Arc::new(HighlightingAssets::from_binary()),
		}
	}
}

impl Default for HighlightAssets {
	fn default() -> Self {
		Self::load()
	}
}

/// Parameters for a single highlight pass.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRequest<'a> {
	/// Language tag used to pick a syntax definition, e.g. `jsx`.
	pub language: Option<&'a str>,
	/// Optional bat theme name.
	pub bat_theme: Option<&'a str>,
	/// Maximum number of lines to render before truncating.
	pub max_lines: usize,
	/// Whether to render a line-number gutter.
	pub line_numbers: bool,
}

impl Default for HighlightRequest<'_> {
	fn default() -> Self {
		Self {
			language: None,
			bat_theme: None,
			max_lines: 4096,
			line_numbers: false,
		}
	}
}

/// Highlight source text using bat's Controller API.
///
/// Syntax selection goes through a synthetic file name derived from the
/// language tag. Unknown tags and controller failures fall back to plain
/// rendering so the caller always gets lines back.
pub fn highlight_source(
	content: &str,
	request: HighlightRequest<'_>,
	assets: &HighlightAssets,
) -> Vec<Line<'static>> {
	let theme = request.bat_theme.unwrap_or("Monokai Extended").to_string();
	let mut style_components = StyleComponents::default();
	if request.line_numbers {
		style_components.insert(StyleComponent::LineNumbers);
	}

	let config = Config {
		colored_output: true,
		true_color: true,
		style_components,
		theme,
		visible_lines: VisibleLines::Ranges(LineRanges::all()),
		term_width: 200,
		tab_width: 4,
		..Default::default()
	};

	let controller = Controller::new(&config, &assets.inner);
	let name = synthetic_name(request.language);
	let input = Input::from_reader(Box::new(std::io::Cursor::new(content.to_string())))
		.with_name(Some(name.as_path()));

	let mut buffer = String::new();
	let mut output = Vec::new();
	if controller.run(vec![input], Some(&mut buffer)).is_ok() {
		for (i, line) in buffer.lines().enumerate() {
			if i >= request.max_lines {
				output.push(truncation_marker());
				break;
			}
			output.push(parse_ansi_line(line));
		}
	} else {
		output = fallback_lines(content, request.max_lines, request.line_numbers);
	}

	output
}

/// Map a language tag to a file name bat can resolve a syntax from.
fn synthetic_name(language: Option<&str>) -> PathBuf {
	let extension = match language.map(str::trim) {
		None | Some("") => "txt",
		Some("javascript") => "js",
		Some("typescript") => "ts",
		Some("markdown") => "md",
		Some("python") => "py",
		Some("rust") => "rs",
		Some("shell" | "bash" | "sh") => "sh",
		Some(tag) => tag,
	};
	PathBuf::from(format!("artifact.{extension}"))
}

/// Plain rendering used when the highlighter is unavailable.
fn fallback_lines(content: &str, max_lines: usize, line_numbers: bool) -> Vec<Line<'static>> {
	let mut output = Vec::new();
	for (i, line) in content.lines().enumerate() {
		if i >= max_lines {
			output.push(truncation_marker());
			break;
		}
		if line_numbers {
			let gutter = format!("{:>4} │ ", i + 1);
			output.push(Line::from(vec![
				Span::styled(gutter, Style::default()),
				Span::raw(line.to_string()),
			]));
		} else {
			output.push(Line::from(Span::raw(line.to_string())));
		}
	}
	output
}

fn truncation_marker() -> Line<'static> {
	Line::from(Span::styled("... (truncated)", Style::default()))
}

/// Parse ANSI escape codes into ratatui spans.
///
/// This converts bat's ANSI output into ratatui's styled text format.
fn parse_ansi_line(line: &str) -> Line<'static> {
	let mut spans = Vec::new();
	let mut current_text = String::new();
	let mut current_style = Style::default();
	let mut chars = line.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch == '\x1b' {
			// Start of ANSI escape sequence
			if !current_text.is_empty() {
				spans.push(Span::styled(
					std::mem::take(&mut current_text),
					current_style,
				));
			}

			if chars.next() == Some('[') {
				let mut code = String::new();
				while let Some(&c) = chars.peek() {
					if c.is_ascii_digit() || c == ';' {
						code.push(c);
						chars.next();
					} else {
						break;
					}
				}

				// Consume the final character (usually 'm')
				if chars.next() == Some('m') {
					current_style = parse_ansi_codes(&code, current_style);
				}
			}
		} else {
			current_text.push(ch);
		}
	}

	if !current_text.is_empty() {
		spans.push(Span::styled(current_text, current_style));
	}

	Line::from(spans)
}

/// Parse ANSI SGR codes and update style.
fn parse_ansi_codes(codes: &str, mut style: Style) -> Style {
	use ratatui::style::{Color, Modifier};

	let parts: Vec<&str> = codes.split(';').collect();
	let mut i = 0;

	while i < parts.len() {
		match parts[i].parse::<u8>() {
			Ok(0) => style = Style::default(),
			Ok(1) => style = style.add_modifier(Modifier::BOLD),
			Ok(2) => style = style.add_modifier(Modifier::DIM),
			Ok(3) => style = style.add_modifier(Modifier::ITALIC),
			Ok(4) => style = style.add_modifier(Modifier::UNDERLINED),
			Ok(7) => style = style.add_modifier(Modifier::REVERSED),
			Ok(22) => {
				style = style
					.remove_modifier(Modifier::BOLD)
					.remove_modifier(Modifier::DIM);
			}
			Ok(23) => style = style.remove_modifier(Modifier::ITALIC),
			Ok(24) => style = style.remove_modifier(Modifier::UNDERLINED),
			Ok(27) => style = style.remove_modifier(Modifier::REVERSED),
			// Foreground colors (30-37)
			Ok(30) => style = style.fg(Color::Black),
			Ok(31) => style = style.fg(Color::Red),
			Ok(32) => style = style.fg(Color::Green),
			Ok(33) => style = style.fg(Color::Yellow),
			Ok(34) => style = style.fg(Color::Blue),
			Ok(35) => style = style.fg(Color::Magenta),
			Ok(36) => style = style.fg(Color::Cyan),
			Ok(37) => style = style.fg(Color::Gray),
			Ok(39) => style = style.fg(Color::Reset),
			// Bright foreground colors (90-97)
			Ok(90) => style = style.fg(Color::DarkGray),
			Ok(91) => style = style.fg(Color::LightRed),
			Ok(92) => style = style.fg(Color::LightGreen),
			Ok(93) => style = style.fg(Color::LightYellow),
			Ok(94) => style = style.fg(Color::LightBlue),
			Ok(95) => style = style.fg(Color::LightMagenta),
			Ok(96) => style = style.fg(Color::LightCyan),
			Ok(97) => style = style.fg(Color::White),
			// 24-bit foreground: 38;2;r;g;b
			Ok(38) => {
				if parts.get(i + 1) == Some(&"2")
					&& let (Some(r), Some(g), Some(b)) = (
						parts.get(i + 2).and_then(|p| p.parse().ok()),
						parts.get(i + 3).and_then(|p| p.parse().ok()),
						parts.get(i + 4).and_then(|p| p.parse().ok()),
					) {
					style = style.fg(Color::Rgb(r, g, b));
					i += 4;
				}
			}
			// 24-bit background: 48;2;r;g;b
			Ok(48) => {
				if parts.get(i + 1) == Some(&"2")
					&& let (Some(r), Some(g), Some(b)) = (
						parts.get(i + 2).and_then(|p| p.parse().ok()),
						parts.get(i + 3).and_then(|p| p.parse().ok()),
						parts.get(i + 4).and_then(|p| p.parse().ok()),
					) {
					style = style.bg(Color::Rgb(r, g, b));
					i += 4;
				}
			}
			_ => {}
		}
		i += 1;
	}

	style
}
