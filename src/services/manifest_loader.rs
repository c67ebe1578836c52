use std::path::Path;
use tokio::fs;
use tracing::debug;
use crate::models::manifest::Manifest;
use crate::utils::error::{ExportError, Result};

/// Reads and parses the project's `package.json`
pub struct ManifestLoader;

impl ManifestLoader {
    /// Load the manifest at `path`
    ///
    /// Unreadable, empty and malformed manifests are all errors; an export
    /// cannot continue without knowing its dependencies.
    pub async fn load(path: &Path, allow_missing_dependencies: bool) -> Result<Manifest> {
        let content = fs::read_to_string(path).await
            .map_err(|source| ExportError::ManifestUnreadable { path: path.to_path_buf(), source })?;

        if content.trim().is_empty() {
            return Err(ExportError::ManifestEmpty(path.to_path_buf()));
        }

        let manifest = Manifest::from_json(&content, allow_missing_dependencies)
            .map_err(|reason| ExportError::MalformedManifest { path: path.to_path_buf(), reason })?;

        debug!(
            path = %path.display(),
            package = manifest.name.as_deref().unwrap_or("-"),
            version = manifest.version.as_deref().unwrap_or("-"),
            dependencies = manifest.dependencies.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }
}
