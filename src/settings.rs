use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use arv::app_dirs;
use arv_tui::style::{self, StyleConfig};
use arv_tui::{Theme, ViewLabels};

use crate::cli::CliArgs;

/// Fallback line cap per body when neither config nor CLI set one.
const DEFAULT_MAX_LINES: usize = 4096;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    renderer: Option<String>,
    max_lines: Option<usize>,
    preview_label: Option<String>,
    code_label: Option<String>,
}

/// Effective configuration after merging files, environment, and CLI flags.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) style: StyleConfig,
    pub(crate) bat_theme: String,
    pub(crate) labels: ViewLabels,
    pub(crate) renderer: Option<String>,
    pub(crate) max_lines: usize,
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if cli.theme.is_some() {
            self.ui.theme = cli.theme.clone();
        }
        if cli.renderer.is_some() {
            self.ui.renderer = cli.renderer.clone();
        }
        if cli.max_lines.is_some() {
            self.ui.max_lines = cli.max_lines;
        }
        if cli.preview_label.is_some() {
            self.ui.preview_label = cli.preview_label.clone();
        }
        if cli.code_label.is_some() {
            self.ui.code_label = cli.code_label.clone();
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let (theme, bat_theme) = resolve_theme(self.ui.theme.as_deref())?;

        let defaults = ViewLabels::default();
        let labels = ViewLabels::new(
            self.ui.preview_label.unwrap_or(defaults.preview),
            self.ui.code_label.unwrap_or(defaults.code),
        );

        Ok(ResolvedConfig {
            style: StyleConfig::with_theme(theme),
            bat_theme,
            labels,
            renderer: self.ui.renderer,
            max_lines: self.ui.max_lines.unwrap_or(DEFAULT_MAX_LINES),
        })
    }
}

fn resolve_theme(name: Option<&str>) -> Result<(Theme, String)> {
    let Some(name) = name else {
        let descriptor = &style::builtin_themes()[0];
        return Ok((descriptor.theme, descriptor.bat_theme.to_string()));
    };

    match style::by_name(name) {
        Some(descriptor) => Ok((descriptor.theme, descriptor.bat_theme.to_string())),
        None => {
            let known: Vec<&str> = style::names().collect();
            bail!("unknown theme '{name}' (available: {})", known.join(", "))
        }
    }
}

/// Merge configuration sources and produce the effective settings.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("arv")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn raw_from_file(contents: &str) -> RawConfig {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");

        Config::builder()
            .add_source(File::from(file.path()).required(true))
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config")
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = RawConfig::default().resolve().expect("resolve");
        assert_eq!(resolved.labels.preview, "Preview");
        assert_eq!(resolved.labels.code, "Code");
        assert_eq!(resolved.max_lines, DEFAULT_MAX_LINES);
        assert!(resolved.renderer.is_none());
        assert_eq!(resolved.bat_theme, style::builtin_themes()[0].bat_theme);
    }

    #[test]
    fn config_file_sections_reach_the_resolved_settings() {
        let raw = raw_from_file(
            r#"
            [ui]
            theme = "paper"
            preview_label = "Rendered"
            max_lines = 64
            "#,
        );
        let resolved = raw.resolve().expect("resolve");
        assert_eq!(resolved.labels.preview, "Rendered");
        assert_eq!(resolved.labels.code, "Code");
        assert_eq!(resolved.max_lines, 64);
        assert_eq!(resolved.bat_theme, style::bat_theme("paper").unwrap());
    }

    #[test]
    fn unknown_theme_names_are_rejected_with_the_catalog() {
        let raw = RawConfig {
            ui: UiSection {
                theme: Some("nope".into()),
                ..UiSection::default()
            },
        };
        let err = raw.resolve().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown theme 'nope'"), "{message}");
        assert!(message.contains("midnight"), "{message}");
    }

    #[test]
    fn cli_flags_override_file_values() {
        let mut raw = raw_from_file("[ui]\ntheme = \"paper\"\n");
        let cli = CliArgs {
            artifact: None,
            config: Vec::new(),
            no_config: true,
            theme: Some("mono".into()),
            renderer: Some("markdown".into()),
            max_lines: None,
            preview_label: None,
            code_label: None,
            list_themes: false,
        };
        raw.apply_cli_overrides(&cli);
        let resolved = raw.resolve().expect("resolve");
        assert_eq!(resolved.bat_theme, style::bat_theme("mono").unwrap());
        assert_eq!(resolved.renderer.as_deref(), Some("markdown"));
    }
}
