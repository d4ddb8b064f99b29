//! Frame composition for the viewer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};

use super::{ArtifactView, ViewSelection};
use crate::components::{BodyContext, HeaderContext, TabTrigger, header_height, render_body, render_header};

impl ArtifactView {
	/// Draw the header and the active body into `frame`.
	///
	/// Records the trigger and viewport areas used for mouse dispatch.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		if area.width == 0 || area.height == 0 {
			return;
		}
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		if area.width == 0 || area.height == 0 {
			return;
		}

		let triggers = [
			TabTrigger {
				value: ViewSelection::Preview,
				label: &self.labels.preview,
			},
			TabTrigger {
				value: ViewSelection::Code,
				label: &self.labels.code,
			},
		];

		let header_rows = header_height(&self.artifact.name, &triggers, area.width);
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(header_rows), Constraint::Min(1)])
			.split(area);

		let header_ctx = HeaderContext {
			title: &self.artifact.name,
			triggers: &triggers,
			selected: self.selection,
			theme: &self.style.theme,
		};
		self.trigger_areas = render_header(frame, layout[0], header_ctx);

		let body = match self.selection {
			ViewSelection::Preview => &self.preview_body,
			ViewSelection::Code => &self.code_body,
		};
		let title = self.labels.label_for(self.selection);
		let scroll_offset = self.active_scroll();
		let body_ctx = BodyContext {
			lines: &body.lines,
			scroll_offset,
			scrollbar_state: &mut self.scrollbar_state,
			title,
			theme: &self.style.theme,
		};
		let inner = render_body(frame, layout[1], body_ctx);
		self.body_area = Some(inner);
		self.viewport_height = inner.height as usize;
	}
}
