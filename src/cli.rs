use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

/// Command-line arguments accepted by the `arv` binary.
#[derive(Parser, Debug)]
#[command(
    name = "arv",
    version,
    about = "Terminal viewer for generated code artifacts",
    color = ColorChoice::Auto
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "ARTIFACT",
        help = "Path to an artifact JSON file, or '-' to read it from stdin"
    )]
    pub(crate) artifact: Option<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ARV_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: midnight)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'r',
        long,
        value_name = "ID",
        help = "Select a registered preview renderer (default: first registered)"
    )]
    pub(crate) renderer: Option<String>,
    #[arg(
        long = "max-lines",
        value_name = "N",
        help = "Cap highlighted lines per body (default: 4096)"
    )]
    pub(crate) max_lines: Option<usize>,
    #[arg(
        long = "preview-label",
        value_name = "TEXT",
        help = "Override the preview trigger label (default: Preview)"
    )]
    pub(crate) preview_label: Option<String>,
    #[arg(
        long = "code-label",
        value_name = "TEXT",
        help = "Override the source trigger label (default: Code)"
    )]
    pub(crate) code_label: Option<String>,
    #[arg(long = "list-themes", help = "Print available theme names and exit")]
    pub(crate) list_themes: bool,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
