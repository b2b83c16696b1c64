//! Configuration for release manifest generation.
//!
//! This crate handles:
//! - Loading pipeline definitions (YAML)
//! - Manifest settings (output location, resource root, artifact selection)

pub mod error;
pub mod pipeline;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use pipeline::{load_pipeline, parse_pipeline};
pub use settings::ManifestSettings;
