//! Pipeline definition loading.

use crate::{ConfigError, ConfigResult};
use relman_core::{Pipeline, ResourceKind};
use std::path::Path;
use tracing::{debug, info, warn};

/// Read and parse a pipeline definition file.
pub fn load_pipeline(path: impl AsRef<Path>) -> ConfigResult<Pipeline> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pipeline = parse_pipeline(&content)?;
    info!(
        path = %path.display(),
        resources = pipeline.resources.len(),
        "Loaded pipeline definition"
    );
    Ok(pipeline)
}

/// Parse a pipeline definition from YAML text.
///
/// Only `resources` is read. A document without it has no resources.
pub fn parse_pipeline(yaml: &str) -> ConfigResult<Pipeline> {
    // An empty document deserializes to unit, not to a mapping.
    if yaml.trim().is_empty() {
        return Ok(Pipeline::default());
    }

    // Merge keys (`<<: *anchor`) are only resolved on a `Value`.
    let mut document: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    if document.is_null() {
        return Ok(Pipeline::default());
    }
    document.apply_merge()?;
    let pipeline: Pipeline = serde_yaml::from_value(document)?;

    for resource in &pipeline.resources {
        match &resource.kind {
            None => warn!(resource = %resource.name, "Resource has no type, ignoring"),
            Some(ResourceKind::Other(tag)) => {
                debug!(resource = %resource.name, %tag, "Resource type not part of the manifest")
            }
            Some(_) => {}
        }
    }

    for name in pipeline.duplicate_names() {
        warn!(resource = %name, "Resource name declared more than once");
    }

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_resources_in_order() {
        let yaml = r#"
resources:
  - name: service-repo
    type: git
    branch: main
    source:
      uri: git@github.com:org/service.git
  - name: service-image
    type: docker-image
    source:
      repository: https://registry.example.com/team/service
      username: ci
  - name: service-tarball
    type: s3
    source:
      bucket: releases
      regexp: service-(.*).tar.gz

jobs:
  - name: build
    plan:
      - get: service-repo
"#;

        let pipeline = parse_pipeline(yaml).unwrap();
        assert_eq!(pipeline.resources.len(), 3);

        let repo = &pipeline.resources[0];
        assert_eq!(repo.name, "service-repo");
        assert_eq!(repo.kind, Some(ResourceKind::Git));
        assert_eq!(repo.branch.as_deref(), Some("main"));

        let image = &pipeline.resources[1];
        assert_eq!(image.kind, Some(ResourceKind::DockerImage));
        assert_eq!(
            image.source.repository.as_deref(),
            Some("https://registry.example.com/team/service")
        );

        assert_eq!(pipeline.resources[2].kind, Some(ResourceKind::S3));
    }

    #[test]
    fn test_missing_type_is_unrecognized() {
        let yaml = r#"
resources:
  - name: mystery
  - name: clock
    type: time
"#;

        let pipeline = parse_pipeline(yaml).unwrap();
        assert_eq!(pipeline.resources[0].kind, None);
        assert_eq!(
            pipeline.resources[1].kind,
            Some(ResourceKind::Other("time".to_string()))
        );
    }

    #[test]
    fn test_branch_under_source() {
        let yaml = r#"
resources:
  - name: repo
    type: git
    source:
      branch: release/1.x
"#;

        let pipeline = parse_pipeline(yaml).unwrap();
        assert_eq!(pipeline.resources[0].branch, None);
        assert_eq!(pipeline.resources[0].effective_branch(), Some("release/1.x"));
    }

    #[test]
    fn test_merge_keys_in_source() {
        let yaml = r#"
shared:
  image_source: &image-source
    repository: https://registry.example.com/team/app
    username: ci

resources:
  - name: app-image
    type: docker-image
    source:
      <<: *image-source
      tag: latest
"#;

        let pipeline = parse_pipeline(yaml).unwrap();
        assert_eq!(
            pipeline.resources[0].source.repository.as_deref(),
            Some("https://registry.example.com/team/app")
        );
    }

    #[test]
    fn test_comment_only_document() {
        let pipeline = parse_pipeline("# nothing declared yet\n").unwrap();
        assert!(pipeline.resources.is_empty());
    }

    #[test]
    fn test_no_resources_key() {
        let pipeline = parse_pipeline("jobs: []\n").unwrap();
        assert!(pipeline.resources.is_empty());

        let pipeline = parse_pipeline("").unwrap();
        assert!(pipeline.resources.is_empty());
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let yaml = r#"
resources:
  - type: git
"#;

        let result = parse_pipeline(yaml);
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_document() {
        let result = parse_pipeline("resources: [unclosed");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.yml");

        let err = load_pipeline(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "resources:\n  - name: repo\n    type: git\n    branch: main").unwrap();

        let pipeline = load_pipeline(file.path()).unwrap();
        assert_eq!(pipeline.resources.len(), 1);
    }
}
