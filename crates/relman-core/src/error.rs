//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read metadata file {}: {source}", path.display())]
    MissingMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resource '{resource}' is missing required field: {field}")]
    MissingField { resource: String, field: String },

    #[error("resource '{resource}' of type '{kind}' is not an artifact")]
    UnsupportedArtifact { resource: String, kind: String },

    #[error("cannot write manifest {}: {source}", path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
