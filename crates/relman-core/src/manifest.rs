//! The release manifest document.

use serde::{Deserialize, Serialize};

/// Value of `manifestFormatVersion` in every manifest this crate writes.
pub const MANIFEST_FORMAT_VERSION: &str = "2";

/// Build provenance of one component release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub manifest_format_version: String,
    pub component_name: String,
    pub component_version: String,
    /// One record per git resource, in pipeline order.
    pub build_repos: Vec<RepoMetadata>,
    /// One record per selected artifact resource, in pipeline order.
    pub component_artifacts: Vec<ArtifactMetadata>,
}

impl Manifest {
    pub fn new(component_name: impl Into<String>, component_version: impl Into<String>) -> Self {
        Self {
            manifest_format_version: MANIFEST_FORMAT_VERSION.to_string(),
            component_name: component_name.into(),
            component_version: component_version.into(),
            build_repos: Vec::new(),
            component_artifacts: Vec::new(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source repository a component was built from.
///
/// `url` carries the resource name, same as `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub url: String,
    pub branch: Option<String>,
    pub timestamp: String,
    pub commit: String,
    pub version: String,
}

/// A produced artifact, tagged by resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArtifactMetadata {
    #[serde(rename = "registry-image")]
    RegistryImage(RegistryImageArtifact),
    #[serde(rename = "docker-image")]
    DockerImage(DockerImageArtifact),
    #[serde(rename = "s3")]
    S3(S3Artifact),
}

impl ArtifactMetadata {
    pub fn artifact_id(&self) -> &str {
        match self {
            ArtifactMetadata::RegistryImage(a) => &a.artifact_id,
            ArtifactMetadata::DockerImage(a) => &a.artifact_id,
            ArtifactMetadata::S3(a) => &a.artifact_id,
        }
    }

    pub fn kind(&self) -> crate::ResourceKind {
        match self {
            ArtifactMetadata::RegistryImage(_) => crate::ResourceKind::RegistryImage,
            ArtifactMetadata::DockerImage(_) => crate::ResourceKind::DockerImage,
            ArtifactMetadata::S3(_) => crate::ResourceKind::S3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryImageArtifact {
    pub artifact_id: String,
    pub endpoint: String,
    pub path: String,
    /// Image tag.
    pub version: String,
    pub digest: String,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerImageArtifact {
    pub artifact_id: String,
    pub endpoint: String,
    pub path: String,
    /// Image tag.
    pub version: String,
    pub image_id: String,
    pub digest: String,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Artifact {
    pub artifact_id: String,
    /// Network location of the object URL.
    pub endpoint: String,
    /// Path of the object URL.
    pub path: String,
    pub version: String,
}
