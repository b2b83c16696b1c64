//! CLI command implementations.

use anyhow::{Context, Result};
use relman_builder::ManifestBuilder;
use relman_config::{ManifestSettings, load_pipeline};
use std::path::Path;

/// Load the pipeline, assemble the manifest and write it.
///
/// With `to_stdout` the manifest is printed and no file is touched.
pub fn generate(
    component: &str,
    version: &str,
    pipeline_path: &Path,
    settings: ManifestSettings,
    to_stdout: bool,
) -> Result<()> {
    let pipeline = load_pipeline(pipeline_path).with_context(|| {
        format!(
            "Failed to load pipeline definition: {}",
            pipeline_path.display()
        )
    })?;

    let builder = ManifestBuilder::from_settings(settings);

    if to_stdout {
        let manifest = builder
            .build(component, version, &pipeline)
            .context("Failed to assemble manifest")?;
        println!("{}", manifest.to_json(builder.settings().pretty)?);
        return Ok(());
    }

    let output = builder.settings().output_path();
    builder
        .build_and_write(component, version, &pipeline)
        .with_context(|| format!("Failed to generate manifest: {}", output.display()))?;
    Ok(())
}
