//! Visual styling utilities.
//!
//! The `style` module is the umbrella for UI appearance. Themes represent the
//! color schemes applied to the viewer, while additional styling options can
//! be layered alongside themes in the future.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, bat_theme, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs. Additional visual tweaks can be
/// surfaced here over time while keeping themes focused on color schemes.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the viewer.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
