//! relman CLI tool.
//!
//! Invoked by the pipeline as
//! `relman COMPONENT VERSION SLOT3 SLOT4 PIPELINE`.

use clap::Parser;
use relman_config::ManifestSettings;
use relman_config::settings::DEFAULT_OUTPUT_DIR;
use relman_core::ResourceKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "relman")]
#[command(about = "Write a release manifest from pipeline resource metadata", long_about = None)]
struct Cli {
    /// Component name
    component: String,

    /// Component version
    version: String,

    /// Reserved by the calling convention, ignored
    #[arg(value_name = "SLOT3")]
    slot3: String,

    /// Reserved by the calling convention, ignored
    #[arg(value_name = "SLOT4")]
    slot4: String,

    /// Path to the pipeline definition (YAML)
    pipeline: PathBuf,

    /// Directory the manifest is written to (must exist)
    #[arg(long, env = "RELMAN_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Directory resource names are resolved against
    #[arg(long, env = "RELMAN_RESOURCE_ROOT", default_value = ".")]
    resource_root: PathBuf,

    /// Resource types listed as component artifacts [default: s3,docker-image]
    #[arg(long = "artifact-type", env = "RELMAN_ARTIFACT_TYPES", value_delimiter = ',')]
    artifact_types: Vec<String>,

    /// Print the manifest to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<ManifestSettings> {
        let settings = ManifestSettings::new()
            .with_output_dir(&self.output_dir)
            .with_resource_root(&self.resource_root)
            .with_pretty(self.pretty)
            .with_artifact_types(
                self.artifact_types
                    .iter()
                    .map(|t| ResourceKind::from(t.trim())),
            )?;
        Ok(settings)
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    tracing::debug!(slot3 = %cli.slot3, slot4 = %cli.slot4, "Ignoring reserved arguments");

    let settings = cli.settings()?;
    commands::generate(
        &cli.component,
        &cli.version,
        &cli.pipeline,
        settings,
        cli.stdout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_five_positional_arguments() {
        let cli = Cli::try_parse_from([
            "relman",
            "svc",
            "1.0",
            "unused-a",
            "unused-b",
            "ci/pipeline.yml",
        ])
        .unwrap();

        assert_eq!(cli.component, "svc");
        assert_eq!(cli.version, "1.0");
        assert_eq!(cli.pipeline, PathBuf::from("ci/pipeline.yml"));
        assert!(!cli.stdout);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        let result = Cli::try_parse_from(["relman", "svc", "1.0", "ci/pipeline.yml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_artifact_types_option() {
        let cli = Cli::try_parse_from([
            "relman",
            "svc",
            "1.0",
            "-",
            "-",
            "pipeline.yml",
            "--artifact-type",
            "s3,registry-image",
            "--output-dir",
            "out",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(
            settings.artifact_types,
            vec![ResourceKind::S3, ResourceKind::RegistryImage]
        );
        assert_eq!(settings.output_path(), PathBuf::from("out/manifest.json"));
    }

    #[test]
    fn test_invalid_artifact_type() {
        let cli = Cli::try_parse_from([
            "relman",
            "svc",
            "1.0",
            "-",
            "-",
            "pipeline.yml",
            "--artifact-type",
            "git",
        ])
        .unwrap();

        assert!(cli.settings().is_err());
    }
}
