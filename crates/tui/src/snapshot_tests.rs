use arv_render_api::Artifact;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::text::Text;
use serde_json::Value;

use crate::config::ViewLabels;
use crate::style::StyleConfig;
use crate::view::{ArtifactView, ViewSelection};

struct StubPreview(&'static str);

impl arv_render_api::SourceRenderer for StubPreview {
	fn render_preview(&self, _source: &str, _props: &Value) -> Text<'static> {
		Text::raw(self.0)
	}
}

struct EchoFormatter;

impl arv_render_api::TextFormatter for EchoFormatter {
	fn format(&self, text: &str) -> Text<'static> {
		Text::from(text.to_string())
	}
}

fn view_for(artifact: Artifact, preview: &'static str) -> ArtifactView {
	ArtifactView::new(
		artifact,
		&StubPreview(preview),
		&EchoFormatter,
		ViewLabels::default(),
		StyleConfig::default(),
	)
}

fn draw_to_string(view: &mut ArtifactView, width: u16, height: u16) -> String {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| view.draw(frame))
		.expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn first_render_shows_the_preview_body() {
	let mut view = view_for(Artifact::new("Widget", "const x = 1;"), "PREVIEW MARKER");
	let snapshot = draw_to_string(&mut view, 60, 16);

	assert!(snapshot.contains("PREVIEW MARKER"), "\n{snapshot}");
	assert!(!snapshot.contains("```jsx"), "\n{snapshot}");
	assert!(snapshot.contains("Widget"), "\n{snapshot}");
	assert!(snapshot.contains(" Preview "), "\n{snapshot}");
	assert!(snapshot.contains(" Code "), "\n{snapshot}");
}

#[test]
fn activating_code_swaps_the_visible_body() {
	let mut view = view_for(Artifact::new("Widget", "const x = 1;"), "PREVIEW MARKER");
	view.select(ViewSelection::Code);
	let snapshot = draw_to_string(&mut view, 60, 16);

	assert!(snapshot.contains("```jsx"), "\n{snapshot}");
	assert!(snapshot.contains("const x = 1;"), "\n{snapshot}");
	assert!(!snapshot.contains("PREVIEW MARKER"), "\n{snapshot}");
}

#[test]
fn title_renders_the_name_exactly() {
	let name = "Data Table v2 (draft)";
	let mut view = view_for(Artifact::new(name, ""), "body");
	let snapshot = draw_to_string(&mut view, 80, 12);

	let first_row = snapshot.lines().next().expect("first row");
	assert!(first_row.contains(name), "\n{snapshot}");
}

#[test]
fn triggers_wrap_below_the_title_on_narrow_terminals() {
	let mut view = view_for(
		Artifact::new("A Much Longer Artifact Name", "src"),
		"body",
	);
	let snapshot = draw_to_string(&mut view, 30, 12);
	let rows: Vec<&str> = snapshot.lines().collect();

	assert!(rows[0].contains("A Much Longer"), "\n{snapshot}");
	assert!(!rows[0].contains("Preview"), "\n{snapshot}");
	assert!(rows[1].contains("Preview"), "\n{snapshot}");
	assert!(rows[1].contains("Code"), "\n{snapshot}");
	// The body panel starts below the two header rows.
	assert!(rows[2].contains("╭"), "\n{snapshot}");
}

#[test]
fn wide_terminals_keep_title_and_triggers_on_one_row() {
	let mut view = view_for(Artifact::new("Widget", "src"), "body");
	let snapshot = draw_to_string(&mut view, 60, 12);
	let rows: Vec<&str> = snapshot.lines().collect();

	assert!(rows[0].contains("Widget"), "\n{snapshot}");
	assert!(rows[0].contains("Preview"), "\n{snapshot}");
	assert!(rows[1].contains("╭"), "\n{snapshot}");
}

#[test]
fn empty_source_shows_an_empty_fenced_block_in_the_code_view() {
	let mut view = view_for(Artifact::new("Widget", ""), "body");
	view.select(ViewSelection::Code);
	let snapshot = draw_to_string(&mut view, 40, 10);

	assert!(snapshot.contains("```jsx"), "\n{snapshot}");
}

#[test]
fn overflowing_body_scrolls_to_the_end() {
	let body: Vec<String> = (0..50).map(|i| format!("line-{i:02}")).collect();
	let mut view = ArtifactView::new(
		Artifact::new("Widget", body.join("\n").as_str()),
		&StubPreview("unused"),
		&EchoFormatter,
		ViewLabels::default(),
		StyleConfig::default(),
	);
	view.select(ViewSelection::Code);

	let snapshot = draw_to_string(&mut view, 40, 12);
	assert!(snapshot.contains("line-00"), "\n{snapshot}");
	assert!(!snapshot.contains("line-49"), "\n{snapshot}");

	view.scroll_to_end();
	let snapshot = draw_to_string(&mut view, 40, 12);
	assert!(snapshot.contains("line-49"), "\n{snapshot}");
	assert!(!snapshot.contains("line-00"), "\n{snapshot}");
}

#[test]
fn zero_sized_frames_draw_without_panicking() {
	let mut view = view_for(Artifact::new("Widget", "src"), "body");
	let _ = draw_to_string(&mut view, 0, 0);
	let _ = draw_to_string(&mut view, 2, 1);
}
