//! Bridge from resolved settings to a running viewer.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use arv::{
	Artifact, ArtifactView, HighlightAssets, MarkdownRenderer, PreviewRenderer, RendererRegistry,
};

use crate::cli::CliArgs;
use crate::settings::ResolvedConfig;

pub(crate) fn run_viewer(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let Some(path) = cli.artifact.as_deref() else {
		bail!("no artifact given; pass a JSON file path or '-' for stdin");
	};
	let artifact = read_artifact(path)?;
	info!(name = %artifact.name, bytes = artifact.source_code.len(), "loaded artifact");

	let assets = HighlightAssets::load();
	let formatter = MarkdownRenderer::new(assets.clone())
		.with_bat_theme(settings.bat_theme.clone())
		.with_max_code_lines(settings.max_lines);

	let mut registry = RendererRegistry::new();
	registry.register(
		"preview",
		PreviewRenderer::new(assets.clone())
			.with_bat_theme(settings.bat_theme.clone())
			.with_max_lines(settings.max_lines),
	)?;
	registry.register(
		"markdown",
		MarkdownRenderer::new(assets).with_bat_theme(settings.bat_theme.clone()),
	)?;

	let renderer = registry
		.resolve(settings.renderer.as_deref())
		.context("no preview renderer registered")?;

	let mut view = ArtifactView::new(
		artifact,
		renderer.as_ref(),
		&formatter,
		settings.labels,
		settings.style,
	);
	arv::run(&mut view)
}

/// Load an artifact from a JSON file, or from stdin when the path is `-`.
fn read_artifact(path: &Path) -> Result<Artifact> {
	let payload = if path == Path::new("-") {
		let mut buffer = String::new();
		std::io::stdin()
			.read_to_string(&mut buffer)
			.context("failed to read artifact from stdin")?;
		buffer
	} else {
		fs::read_to_string(path)
			.with_context(|| format!("failed to read artifact file {}", path.display()))?
	};

	serde_json::from_str(&payload)
		.with_context(|| format!("malformed artifact in {}", path.display()))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn artifact_files_parse_with_camel_case_fields() {
		let mut file = tempfile::NamedTempFile::with_suffix(".json").expect("temp file");
		file.write_all(
			br#"{"name": "Widget", "sourceCode": "const x = 1;", "props": {"language": "jsx"}}"#,
		)
		.expect("write artifact");

		let artifact = read_artifact(file.path()).expect("read artifact");
		assert_eq!(artifact.name, "Widget");
		assert_eq!(artifact.source_code, "const x = 1;");
		assert_eq!(artifact.props["language"], "jsx");
	}

	#[test]
	fn malformed_artifacts_fail_with_the_file_name() {
		let mut file = tempfile::NamedTempFile::with_suffix(".json").expect("temp file");
		file.write_all(b"{not json").expect("write artifact");

		let err = read_artifact(file.path()).unwrap_err();
		assert!(err.to_string().contains("malformed artifact"), "{err}");
	}

	#[test]
	fn missing_files_fail_with_context() {
		let err = read_artifact(Path::new("/definitely/not/here.json")).unwrap_err();
		assert!(
			err.to_string().contains("failed to read artifact file"),
			"{err}"
		);
	}
}
