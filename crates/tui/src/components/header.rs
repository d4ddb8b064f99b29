//! Header row: artifact title on the left, view triggers on the right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;
use crate::view::ViewSelection;

/// Render metadata for a view trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabTrigger<'a> {
	/// The view this trigger activates.
	pub value: ViewSelection,
	/// Text label displayed on the trigger.
	pub label: &'a str,
}

/// Argument bundle for rendering the header.
pub struct HeaderContext<'a> {
	/// Artifact title, rendered exactly as supplied.
	pub title: &'a str,
	/// View triggers to display, in order.
	pub triggers: &'a [TabTrigger<'a>],
	/// The currently active view.
	pub selected: ViewSelection,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Total columns the trigger group occupies, including padding and gaps.
#[must_use]
pub fn triggers_width(triggers: &[TabTrigger<'_>]) -> u16 {
	let mut width = 0u16;
	for (index, trigger) in triggers.iter().enumerate() {
		if index > 0 {
			width = width.saturating_add(1);
		}
		width = width.saturating_add(trigger_width(trigger));
	}
	width
}

fn trigger_width(trigger: &TabTrigger<'_>) -> u16 {
	(trigger.label.width() as u16).saturating_add(2)
}

/// Number of header rows needed at the given width.
///
/// The triggers move to their own row when the title and trigger group no
/// longer fit side by side.
#[must_use]
pub fn header_height(title: &str, triggers: &[TabTrigger<'_>], width: u16) -> u16 {
	let needed = (title.width() as u16)
		.saturating_add(1)
		.saturating_add(triggers_width(triggers));
	if needed <= width { 1 } else { 2 }
}

/// Render the header and report the on-screen area of each trigger.
///
/// The returned areas are used for mouse hit-testing.
pub fn render_header(
	frame: &mut Frame,
	area: Rect,
	ctx: HeaderContext<'_>,
) -> Vec<(ViewSelection, Rect)> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}

	let group_width = triggers_width(ctx.triggers);
	let two_rows = area.height >= 2
		&& header_height(ctx.title, ctx.triggers, area.width) == 2;

	let (title_area, trigger_row) = if two_rows {
		(
			Rect { height: 1, ..area },
			Rect {
				y: area.y + 1,
				height: 1,
				..area
			},
		)
	} else {
		let title_width = area.width.saturating_sub(group_width.saturating_add(1));
		(
			Rect {
				width: title_width,
				height: 1,
				..area
			},
			Rect { height: 1, ..area },
		)
	};

	if title_area.width > 0 {
		let title = Paragraph::new(Line::from(Span::styled(
			ctx.title.to_string(),
			ctx.theme.title_style(),
		)));
		frame.render_widget(title, title_area);
	}

	// Right-align the trigger group within its row.
	let start_x = trigger_row
		.right()
		.saturating_sub(group_width)
		.max(trigger_row.x);

	let mut areas = Vec::with_capacity(ctx.triggers.len());
	let mut x = start_x;
	let mut spans = Vec::with_capacity(ctx.triggers.len() * 2);
	for (index, trigger) in ctx.triggers.iter().enumerate() {
		if index > 0 {
			spans.push(Span::raw(" "));
			x = x.saturating_add(1);
		}
		let style = if trigger.value == ctx.selected {
			ctx.theme.tab_highlight_style()
		} else {
			ctx.theme.tab_inactive_style()
		};
		spans.push(Span::styled(format!(" {} ", trigger.label), style));

		let width = trigger_width(trigger).min(trigger_row.right().saturating_sub(x));
		areas.push((
			trigger.value,
			Rect {
				x,
				y: trigger_row.y,
				width,
				height: 1,
			},
		));
		x = x.saturating_add(trigger_width(trigger));
	}

	let group_area = Rect {
		x: start_x,
		y: trigger_row.y,
		width: group_width.min(trigger_row.width),
		height: 1,
	};
	frame.render_widget(Paragraph::new(Line::from(spans)), group_area);

	areas
}
