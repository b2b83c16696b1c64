//! Core domain types for release manifests.
//!
//! This crate contains:
//! - Pipeline resource declarations
//! - The manifest document and its repo/artifact records
//! - URL splitting into endpoint and path
//! - Shared error types

pub mod endpoint;
pub mod error;
pub mod manifest;
pub mod pipeline;

pub use endpoint::UrlParts;
pub use error::{Error, Result};
pub use manifest::{
    ArtifactMetadata, DockerImageArtifact, MANIFEST_FORMAT_VERSION, Manifest,
    RegistryImageArtifact, RepoMetadata, S3Artifact,
};
pub use pipeline::{Pipeline, Resource, ResourceKind, ResourceSource};
