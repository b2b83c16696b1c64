//! Manifest assembly for release provenance.
//!
//! Reads the metadata files an external pipeline run leaves next to each
//! resource, turns them into repo and artifact records, and writes the
//! manifest document.

pub mod assemble;
pub mod extract;
pub mod reader;
pub mod writer;

pub use assemble::ManifestBuilder;
pub use reader::{FsReader, MetadataReader};
pub use writer::write_manifest;
