//! Manifest assembly.

use crate::extract::{artifact_metadata, repo_metadata};
use crate::reader::{FsReader, MetadataReader};
use crate::writer::write_manifest;
use relman_config::ManifestSettings;
use relman_core::{Manifest, Pipeline, ResourceKind, Result};
use tracing::info;

/// Turns a loaded pipeline into a manifest.
pub struct ManifestBuilder<R: MetadataReader> {
    reader: R,
    settings: ManifestSettings,
}

impl ManifestBuilder<FsReader> {
    /// Builder reading metadata below `settings.resource_root`.
    pub fn from_settings(settings: ManifestSettings) -> Self {
        let reader = FsReader::new(settings.resource_root.clone());
        Self { reader, settings }
    }
}

impl<R: MetadataReader> ManifestBuilder<R> {
    pub fn new(reader: R, settings: ManifestSettings) -> Self {
        Self { reader, settings }
    }

    pub fn settings(&self) -> &ManifestSettings {
        &self.settings
    }

    /// Assemble the manifest in memory.
    ///
    /// Git resources become `buildRepos` and selected artifact resources
    /// become `componentArtifacts`, both in pipeline order. Any extraction
    /// error aborts the whole build.
    pub fn build(
        &self,
        component_name: &str,
        component_version: &str,
        pipeline: &Pipeline,
    ) -> Result<Manifest> {
        let mut manifest = Manifest::new(component_name, component_version);

        manifest.build_repos = pipeline
            .resources_of(&ResourceKind::Git)
            .map(|resource| repo_metadata(&self.reader, resource))
            .collect::<Result<Vec<_>>>()?;

        manifest.component_artifacts = pipeline
            .resources
            .iter()
            .filter(|resource| {
                resource
                    .kind
                    .as_ref()
                    .is_some_and(|kind| self.settings.selects_artifact(kind))
            })
            .map(|resource| artifact_metadata(&self.reader, resource))
            .collect::<Result<Vec<_>>>()?;

        info!(
            component = %component_name,
            version = %component_version,
            repos = manifest.build_repos.len(),
            artifacts = manifest.component_artifacts.len(),
            "Assembled manifest"
        );
        Ok(manifest)
    }

    /// Assemble the manifest and write it to the configured output path.
    pub fn build_and_write(
        &self,
        component_name: &str,
        component_version: &str,
        pipeline: &Pipeline,
    ) -> Result<Manifest> {
        let manifest = self.build(component_name, component_version, pipeline)?;
        write_manifest(&manifest, &self.settings.output_path(), self.settings.pretty)?;
        Ok(manifest)
    }
}
