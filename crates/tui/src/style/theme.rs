//! Theme definitions and the built-in theme catalog.

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the viewer's UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for header elements, including the artifact title.
	pub header: Style,
	/// Style applied behind the active view trigger.
	pub highlight: Style,
	/// Style for muted text such as placeholders.
	pub empty: Style,
}

impl Theme {
	/// Returns the style for the artifact title.
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	/// Returns the style for inactive view triggers.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the active view trigger.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.fg(self.highlight.fg.unwrap_or(Color::Reset))
			.bg(self.highlight.bg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Returns the style for panel borders.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for muted or placeholder text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named theme together with the bat theme used for syntax highlighting.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDescriptor {
	/// The name the theme is selectable by.
	pub name: &'static str,
	/// The theme configuration.
	pub theme: Theme,
	/// The bat syntax highlighting theme paired with it.
	pub bat_theme: &'static str,
}

const BUILTINS: &[ThemeDescriptor] = &[
	ThemeDescriptor {
		name: "midnight",
		theme: Theme {
			header: Style::new().fg(Color::Cyan),
			highlight: Style::new().fg(Color::Black).bg(Color::Cyan),
			empty: Style::new().fg(Color::DarkGray),
		},
		bat_theme: "Monokai Extended",
	},
	ThemeDescriptor {
		name: "paper",
		theme: Theme {
			header: Style::new().fg(Color::Blue),
			highlight: Style::new().fg(Color::White).bg(Color::Blue),
			empty: Style::new().fg(Color::Gray),
		},
		bat_theme: "GitHub",
	},
	ThemeDescriptor {
		name: "mono",
		theme: Theme {
			header: Style::new(),
			highlight: Style::new().add_modifier(Modifier::REVERSED),
			empty: Style::new().add_modifier(Modifier::DIM),
		},
		bat_theme: "ansi",
	},
];

/// The built-in theme catalog.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDescriptor] {
	BUILTINS
}

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	BUILTINS[0].theme
}

/// Names of all built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|descriptor| descriptor.name)
}

/// Lookup a built-in theme by name, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static ThemeDescriptor> {
	BUILTINS
		.iter()
		.find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
}

/// The bat highlighting theme paired with a built-in theme name.
#[must_use]
pub fn bat_theme(name: &str) -> Option<&'static str> {
	by_name(name).map(|descriptor| descriptor.bat_theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert!(by_name("MIDNIGHT").is_some());
		assert!(by_name("Paper").is_some());
		assert!(by_name("nope").is_none());
	}

	#[test]
	fn every_builtin_pairs_a_bat_theme() {
		for descriptor in builtin_themes() {
			assert!(!descriptor.bat_theme.is_empty(), "{}", descriptor.name);
		}
	}

	#[test]
	fn default_theme_is_first_builtin() {
		let default = default_theme();
		assert_eq!(default.header.fg, BUILTINS[0].theme.header.fg);
	}
}
