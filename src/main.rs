mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;

fn main() -> Result<()> {
	let cli = parse_cli();
	arv::logging::init();

	if cli.list_themes {
		for name in arv::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	workflow::run_viewer(&cli, resolved)
}
