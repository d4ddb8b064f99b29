//! Terminal setup and the event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::view::ArtifactView;

/// Run the viewer until the user dismisses it.
///
/// Takes over the terminal for the duration of the call and restores it on
/// the way out, including when the loop errors.
pub fn run(view: &mut ArtifactView) -> Result<()> {
	let mut terminal = ratatui::init();
	let result = (|| -> Result<()> {
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		event_loop(&mut terminal, view)
	})();

	let _ = execute!(stdout(), DisableMouseCapture);
	ratatui::restore();
	result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, view: &mut ArtifactView) -> Result<()> {
	loop {
		terminal.draw(|frame| view.draw(frame))?;

		if !event::poll(Duration::from_millis(50))? {
			continue;
		}
		match event::read()? {
			Event::Key(key) if key.kind == KeyEventKind::Press => {
				if view.handle_key(key) {
					return Ok(());
				}
			}
			Event::Mouse(mouse) => view.handle_mouse(mouse),
			// The next draw picks up the new dimensions.
			Event::Resize(_, _) => {}
			_ => {}
		}
	}
}
