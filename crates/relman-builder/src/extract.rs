//! Per-resource metadata extraction.

use crate::reader::MetadataReader;
use relman_core::{
    ArtifactMetadata, DockerImageArtifact, Error, RegistryImageArtifact, RepoMetadata, Resource,
    ResourceKind, Result, S3Artifact, UrlParts,
};
use std::path::Path;
use tracing::{debug, warn};

/// Directory a git resource keeps its metadata files in.
pub const GIT_METADATA_DIR: &str = ".git";
/// Commit hash of the checked out revision.
pub const GIT_REF_FILE: &str = "ref";
/// Output of `git describe` for the revision.
pub const GIT_DESCRIBE_FILE: &str = "describe_ref";
/// Commit timestamp of the revision.
pub const GIT_TIMESTAMP_FILE: &str = "commit_timestamp";

/// Build the repo record for a git resource.
pub fn repo_metadata(reader: &impl MetadataReader, resource: &Resource) -> Result<RepoMetadata> {
    let git = Path::new(GIT_METADATA_DIR);
    let commit = reader.read_value(&resource.name, &git.join(GIT_REF_FILE))?;
    let version = reader.read_value(&resource.name, &git.join(GIT_DESCRIBE_FILE))?;
    let timestamp = reader.read_value(&resource.name, &git.join(GIT_TIMESTAMP_FILE))?;

    let branch = resource.effective_branch().map(str::to_string);
    if branch.is_none() {
        warn!(resource = %resource.name, "Git resource declares no branch");
    }

    debug!(resource = %resource.name, %commit, %version, "Extracted repo metadata");

    Ok(RepoMetadata {
        name: resource.name.clone(),
        url: resource.name.clone(),
        branch,
        timestamp,
        commit,
        version,
    })
}

/// Build the artifact record for a registry-image, docker-image or s3 resource.
pub fn artifact_metadata(
    reader: &impl MetadataReader,
    resource: &Resource,
) -> Result<ArtifactMetadata> {
    let name = resource.name.as_str();
    let read = |file: &str| reader.read_value(name, Path::new(file));

    let artifact = match &resource.kind {
        Some(ResourceKind::RegistryImage) => {
            let version = read("tag")?;
            let digest = read("digest")?;
            let repo_url = repository_url(resource)?;
            let repository = read("repository")?;
            ArtifactMetadata::RegistryImage(RegistryImageArtifact {
                artifact_id: resource.name.clone(),
                endpoint: repo_url.endpoint,
                path: repo_url.path,
                version,
                digest,
                repository,
            })
        }
        Some(ResourceKind::DockerImage) => {
            let version = read("tag")?;
            let image_id = read("image_id")?;
            let digest = read("digest")?;
            let repo_url = repository_url(resource)?;
            let repository = read("repository")?;
            ArtifactMetadata::DockerImage(DockerImageArtifact {
                artifact_id: resource.name.clone(),
                endpoint: repo_url.endpoint,
                path: repo_url.path,
                version,
                image_id,
                digest,
                repository,
            })
        }
        Some(ResourceKind::S3) => {
            let file_url = UrlParts::parse(&read("url")?);
            let version = read("version")?;
            ArtifactMetadata::S3(S3Artifact {
                artifact_id: resource.name.clone(),
                endpoint: file_url.endpoint,
                path: file_url.path,
                version,
            })
        }
        other => {
            return Err(Error::UnsupportedArtifact {
                resource: resource.name.clone(),
                kind: other
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            });
        }
    };

    debug!(resource = %name, kind = %artifact.kind(), "Extracted artifact metadata");
    Ok(artifact)
}

fn repository_url(resource: &Resource) -> Result<UrlParts> {
    let repository = resource
        .source
        .repository
        .as_deref()
        .ok_or_else(|| Error::MissingField {
            resource: resource.name.clone(),
            field: "source.repository".to_string(),
        })?;
    Ok(UrlParts::parse(repository))
}
