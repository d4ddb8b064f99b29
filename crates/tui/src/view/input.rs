//! Keyboard and mouse dispatch for the viewer.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::{ArtifactView, ViewSelection};
use crate::components::point_in_rect;

/// Lines scrolled per mouse wheel step.
const WHEEL_SCROLL_LINES: i32 = 3;

impl ArtifactView {
	/// Handle a key press. Returns `true` when the viewer should close.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return true,
			KeyCode::Tab | KeyCode::BackTab => self.toggle(),
			KeyCode::Left => self.select(ViewSelection::Preview),
			KeyCode::Right => self.select(ViewSelection::Code),
			KeyCode::Up => self.scroll_by(-1),
			KeyCode::Down => self.scroll_by(1),
			KeyCode::PageUp => self.scroll_by(-self.page_len()),
			KeyCode::PageDown => self.scroll_by(self.page_len()),
			KeyCode::Home => self.scroll_to_start(),
			KeyCode::End => self.scroll_to_end(),
			_ => {}
		}
		false
	}

	/// Handle a mouse event against the areas recorded at draw time.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(view) = self.trigger_at(mouse.column, mouse.row) {
					self.select(view);
				}
			}
			MouseEventKind::ScrollUp if self.in_body(mouse.column, mouse.row) => {
				self.scroll_by(-WHEEL_SCROLL_LINES);
			}
			MouseEventKind::ScrollDown if self.in_body(mouse.column, mouse.row) => {
				self.scroll_by(WHEEL_SCROLL_LINES);
			}
			_ => {}
		}
	}

	fn page_len(&self) -> i32 {
		self.viewport_height.max(1) as i32
	}

	fn trigger_at(&self, column: u16, row: u16) -> Option<ViewSelection> {
		self.trigger_areas
			.iter()
			.find(|(_, area)| point_in_rect(column, row, *area))
			.map(|(view, _)| *view)
	}

	fn in_body(&self, column: u16, row: u16) -> bool {
		self.body_area
			.is_some_and(|area: Rect| point_in_rect(column, row, area))
	}
}
