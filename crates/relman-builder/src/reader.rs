//! Access to per-resource metadata files.

use relman_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Source of metadata values for resources.
pub trait MetadataReader {
    /// Read the value stored at `relative` inside the directory of `resource`.
    fn read_value(&self, resource: &str, relative: &Path) -> Result<String>;
}

/// Reads metadata from `<root>/<resource>/<relative>` on disk.
#[derive(Debug, Clone)]
pub struct FsReader {
    root: PathBuf,
}

impl FsReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MetadataReader for FsReader {
    fn read_value(&self, resource: &str, relative: &Path) -> Result<String> {
        let path = self.root.join(resource).join(relative);
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| Error::MissingMetadata { path, source })?;
        Ok(normalize_value(&raw))
    }
}

/// Drop every newline. Other whitespace, `\r` included, is kept.
pub fn normalize_value(raw: &str) -> String {
    raw.replace('\n', "")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// In-memory reader keyed by `<resource>/<relative>`.
    #[derive(Debug, Default)]
    pub struct MemoryReader {
        files: HashMap<PathBuf, String>,
    }

    impl MemoryReader {
        pub fn with(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }
    }

    impl MetadataReader for MemoryReader {
        fn read_value(&self, resource: &str, relative: &Path) -> Result<String> {
            let path = Path::new(resource).join(relative);
            match self.files.get(&path) {
                Some(raw) => Ok(normalize_value(raw)),
                None => Err(Error::MissingMetadata {
                    path,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
            }
        }
    }
}
