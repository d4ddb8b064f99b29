//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
	/// Total number of lines in the content.
	pub content_length: usize,
	/// Number of lines visible in the viewport.
	pub viewport_len: usize,
	/// Maximum scroll offset.
	pub max_scroll: usize,
	/// Whether content overflows and needs a scrollbar.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute scroll metrics from content length and viewport height.
	///
	/// Returns default (empty) metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let max_scroll = content_length.saturating_sub(viewport_len);
		let needs_scrollbar = content_length > viewport_len;

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar,
		}
	}

	/// Clamp a scroll offset to the scrollable range.
	#[must_use]
	pub fn clamp(&self, scroll: usize) -> usize {
		scroll.min(self.max_scroll)
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area that should be used for content, with the width reduced
/// by the scrollbar column.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());

	let sb_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, sb_area, scrollbar_state);

	Rect {
		x: area.x,
		y: area.y,
		width: area.width.saturating_sub(1),
		height: area.height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_for_short_content_need_no_scrollbar() {
		let metrics = ScrollMetrics::compute(5, 10);
		assert_eq!(metrics.viewport_len, 5);
		assert_eq!(metrics.max_scroll, 0);
		assert!(!metrics.needs_scrollbar);
	}

	#[test]
	fn metrics_for_overflowing_content_expose_max_scroll() {
		let metrics = ScrollMetrics::compute(30, 10);
		assert_eq!(metrics.viewport_len, 10);
		assert_eq!(metrics.max_scroll, 20);
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.clamp(100), 20);
	}

	#[test]
	fn zero_sized_viewport_yields_empty_metrics() {
		let metrics = ScrollMetrics::compute(30, 0);
		assert_eq!(metrics.viewport_len, 0);
		assert!(!metrics.needs_scrollbar);
	}

	#[test]
	fn point_in_rect_excludes_edges_past_extent() {
		let area = Rect::new(2, 3, 4, 2);
		assert!(point_in_rect(2, 3, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(2, 5, area));
		assert!(!point_in_rect(2, 3, Rect::new(2, 3, 0, 2)));
	}
}
