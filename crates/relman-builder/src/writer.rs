//! Writing the manifest file.

use relman_core::{Error, Manifest, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Write `manifest` as JSON to `path`.
///
/// The document goes to a randomly named temporary file in the same
/// directory and is persisted over `path`, so `path` is either the complete
/// new manifest or untouched. The parent directory must exist.
pub fn write_manifest(manifest: &Manifest, path: &Path, pretty: bool) -> Result<()> {
    let json = manifest.to_json(pretty)?;
    let write_error = |source: std::io::Error| Error::WriteManifest {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    // Dropping the temp file on an early return removes it.
    let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    staged
        .as_file_mut()
        .write_all(json.as_bytes())
        .map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged.persist(path).map_err(|e| write_error(e.error))?;

    info!(
        path = %path.display(),
        repos = manifest.build_repos.len(),
        artifacts = manifest.component_artifacts.len(),
        "Wrote manifest"
    );
    Ok(())
}
