//! Manifest generation settings.

use crate::{ConfigError, ConfigResult};
use relman_core::ResourceKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory the manifest is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "manifest";

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Settings for one manifest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestSettings {
    /// Directory the manifest file is written to. Must already exist.
    pub output_dir: PathBuf,
    /// Directory resource names are resolved against.
    pub resource_root: PathBuf,
    /// Resource types listed under `componentArtifacts`.
    pub artifact_types: Vec<ResourceKind>,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resource_root: PathBuf::from("."),
            artifact_types: default_artifact_types(),
            pretty: false,
        }
    }
}

/// `registry-image` has an extractor but is not selected unless asked for.
pub fn default_artifact_types() -> Vec<ResourceKind> {
    vec![ResourceKind::S3, ResourceKind::DockerImage]
}

impl ManifestSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Replace the artifact selection. Every kind must be one the artifact
    /// extractor understands; an empty list keeps the default.
    pub fn with_artifact_types(
        mut self,
        kinds: impl IntoIterator<Item = ResourceKind>,
    ) -> ConfigResult<Self> {
        let mut selected = Vec::new();
        for kind in kinds {
            if !kind.is_artifact() {
                return Err(ConfigError::InvalidValue {
                    field: "artifact type".to_string(),
                    message: format!(
                        "'{}' is not an artifact type (expected registry-image, docker-image or s3)",
                        kind
                    ),
                });
            }
            if !selected.contains(&kind) {
                selected.push(kind);
            }
        }
        if !selected.is_empty() {
            self.artifact_types = selected;
        }
        Ok(self)
    }

    /// Full path of the manifest file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE_NAME)
    }

    /// Directory holding the metadata files of a resource.
    pub fn resource_dir(&self, name: &str) -> PathBuf {
        self.resource_root.join(name)
    }

    /// Whether resources of this kind go into `componentArtifacts`.
    pub fn selects_artifact(&self, kind: &ResourceKind) -> bool {
        self.artifact_types.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ManifestSettings::default();
        assert_eq!(settings.output_path(), PathBuf::from("manifest/manifest.json"));
        assert_eq!(settings.resource_dir("repo"), PathBuf::from("./repo"));
        assert!(settings.selects_artifact(&ResourceKind::S3));
        assert!(settings.selects_artifact(&ResourceKind::DockerImage));
        assert!(!settings.selects_artifact(&ResourceKind::RegistryImage));
        assert!(!settings.selects_artifact(&ResourceKind::Git));
    }

    #[test]
    fn test_custom_artifact_types() {
        let settings = ManifestSettings::new()
            .with_artifact_types(vec![
                ResourceKind::RegistryImage,
                ResourceKind::S3,
                ResourceKind::RegistryImage,
            ])
            .unwrap();
        assert_eq!(
            settings.artifact_types,
            vec![ResourceKind::RegistryImage, ResourceKind::S3]
        );
        assert!(!settings.selects_artifact(&ResourceKind::DockerImage));
    }

    #[test]
    fn test_empty_artifact_types_keep_default() {
        let settings = ManifestSettings::new().with_artifact_types(Vec::new()).unwrap();
        assert_eq!(settings.artifact_types, default_artifact_types());
    }

    #[test]
    fn test_rejects_non_artifact_types() {
        let result = ManifestSettings::new().with_artifact_types(vec![ResourceKind::Git]);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_custom_locations() {
        let settings = ManifestSettings::new()
            .with_output_dir("/tmp/out")
            .with_resource_root("/workspace");
        assert_eq!(settings.output_path(), PathBuf::from("/tmp/out/manifest.json"));
        assert_eq!(settings.resource_dir("art1"), PathBuf::from("/workspace/art1"));
    }
}
