//! Widget state: one artifact, two prebuilt bodies, one visible at a time.

mod input;
mod render;

use arv_render_api::{Artifact, SOURCE_FENCE_TAG, SourceRenderer, TextFormatter, fenced};
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::ScrollbarState;

use crate::components::ScrollMetrics;
use crate::config::ViewLabels;
use crate::style::StyleConfig;

/// Which of the two bodies is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewSelection {
	/// The rendered preview of the artifact.
	#[default]
	Preview,
	/// The syntax-highlighted source listing.
	Code,
}

impl ViewSelection {
	/// The other view.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Preview => Self::Code,
			Self::Code => Self::Preview,
		}
	}
}

/// Tabbed viewer for a single artifact.
///
/// Both bodies are built eagerly at construction: the preview renderer and
/// the text formatter each run exactly once, and switching views only swaps
/// which prebuilt body is drawn. The artifact itself is never touched after
/// construction.
pub struct ArtifactView {
	artifact: Artifact,
	labels: ViewLabels,
	style: StyleConfig,
	selection: ViewSelection,
	preview_body: Text<'static>,
	code_body: Text<'static>,
	preview_scroll: usize,
	code_scroll: usize,
	pub(crate) scrollbar_state: ScrollbarState,
	/// On-screen areas of the view triggers, recorded at draw time.
	pub(crate) trigger_areas: Vec<(ViewSelection, Rect)>,
	/// Inner viewport of the body panel, recorded at draw time.
	pub(crate) body_area: Option<Rect>,
	pub(crate) viewport_height: usize,
}

impl ArtifactView {
	/// Build a viewer for `artifact`, rendering both bodies up front.
	///
	/// The renderer receives the artifact's source and props exactly as the
	/// host supplied them; the formatter receives the source wrapped in a
	/// fenced code block.
	pub fn new(
		artifact: Artifact,
		renderer: &dyn SourceRenderer,
		formatter: &dyn TextFormatter,
		labels: ViewLabels,
		style: StyleConfig,
	) -> Self {
		let preview_body = renderer.render_preview(&artifact.source_code, &artifact.props);
		let code_body = formatter.format(&fenced(&artifact.source_code, SOURCE_FENCE_TAG));

		Self {
			artifact,
			labels,
			style,
			selection: ViewSelection::default(),
			preview_body,
			code_body,
			preview_scroll: 0,
			code_scroll: 0,
			scrollbar_state: ScrollbarState::default(),
			trigger_areas: Vec::new(),
			body_area: None,
			viewport_height: 0,
		}
	}

	/// The artifact being displayed.
	#[must_use]
	pub fn artifact(&self) -> &Artifact {
		&self.artifact
	}

	/// The currently active view.
	#[must_use]
	pub fn selection(&self) -> ViewSelection {
		self.selection
	}

	/// Activate `view`.
	pub fn select(&mut self, view: ViewSelection) {
		self.selection = view;
	}

	/// Activate the other view.
	pub fn toggle(&mut self) {
		self.selection = self.selection.toggled();
	}

	/// The body for the active view.
	#[must_use]
	pub fn active_body(&self) -> &Text<'static> {
		match self.selection {
			ViewSelection::Preview => &self.preview_body,
			ViewSelection::Code => &self.code_body,
		}
	}

	/// The trigger labels in display order.
	#[must_use]
	pub fn labels(&self) -> &ViewLabels {
		&self.labels
	}

	pub(crate) fn active_scroll(&self) -> usize {
		match self.selection {
			ViewSelection::Preview => self.preview_scroll,
			ViewSelection::Code => self.code_scroll,
		}
	}

	/// Scroll the active body by `delta` lines, clamped to its extent.
	pub fn scroll_by(&mut self, delta: i32) {
		let metrics = ScrollMetrics::compute(self.active_body().lines.len(), self.viewport_height);
		let current = self.active_scroll();
		let next = if delta.is_negative() {
			current.saturating_sub(delta.unsigned_abs() as usize)
		} else {
			current.saturating_add(delta as usize)
		};
		self.set_scroll(metrics.clamp(next));
	}

	/// Scroll the active body to its end.
	pub fn scroll_to_end(&mut self) {
		let metrics = ScrollMetrics::compute(self.active_body().lines.len(), self.viewport_height);
		self.set_scroll(metrics.max_scroll);
	}

	/// Scroll the active body to its start.
	pub fn scroll_to_start(&mut self) {
		self.set_scroll(0);
	}

	fn set_scroll(&mut self, offset: usize) {
		match self.selection {
			ViewSelection::Preview => self.preview_scroll = offset,
			ViewSelection::Code => self.code_scroll = offset,
		}
	}
}
