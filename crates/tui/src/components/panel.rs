//! Bordered body panel for the active view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, ScrollbarState};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Context for rendering the body panel.
pub struct BodyContext<'a> {
	/// Lines of the active body.
	pub lines: &'a [Line<'static>],
	/// Vertical scroll offset.
	pub scroll_offset: usize,
	/// Scrollbar state for the panel.
	pub scrollbar_state: &'a mut ScrollbarState,
	/// Title shown on the panel border.
	pub title: &'a str,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the active body inside a bordered panel.
///
/// The body is drawn exactly as supplied; overflowing content scrolls and
/// gets a scrollbar. Returns the inner viewport area.
pub fn render_body(frame: &mut Frame, area: Rect, ctx: BodyContext<'_>) -> Rect {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(ctx.theme.border_style())
		.title(format!(" {} ", ctx.title));

	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.width == 0 || inner.height == 0 {
		return inner;
	}

	let metrics = ScrollMetrics::compute(ctx.lines.len(), inner.height as usize);
	let offset = metrics.clamp(ctx.scroll_offset);
	let visible: Vec<Line<'_>> = ctx
		.lines
		.iter()
		.skip(offset)
		.take(metrics.viewport_len)
		.cloned()
		.collect();
	let para = Paragraph::new(visible);

	if metrics.needs_scrollbar {
		*ctx.scrollbar_state = ctx
			.scrollbar_state
			.content_length(metrics.max_scroll)
			.position(offset);
		let text_area = render_scrollbar(frame, inner, ctx.scrollbar_state, ctx.theme);
		frame.render_widget(para, text_area);
	} else {
		frame.render_widget(para, inner);
	}

	inner
}
