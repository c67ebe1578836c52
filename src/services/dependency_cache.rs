use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::utils::error::{ExportError, Result};

/// The set of packages installed in a local `node_modules` folder
///
/// Entries are folder names. Scoped packages are listed as `@scope/name`
/// alongside the `@scope` folder itself, so both forms match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyCache {
    root: PathBuf,
    entries: BTreeSet<String>,
}

impl DependencyCache {
    /// List the packages available under `root`
    pub async fn scan(root: &Path) -> Result<Self> {
        let mut entries = BTreeSet::new();

        let mut dir = fs::read_dir(root).await
            .map_err(|e| ExportError::ConfigError(format!(
                "Dependency cache '{}' could not be read: {} (run `npm install` first)",
                root.display(),
                e
            )))?;

        while let Some(entry) = dir.next_entry().await? {
            if !is_directory(&entry.path()).await {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('@') {
                let mut scope = fs::read_dir(entry.path()).await?;
                while let Some(scoped) = scope.next_entry().await? {
                    if is_directory(&scoped.path()).await {
                        entries.insert(format!("{}/{}", name, scoped.file_name().to_string_lossy()));
                    }
                }
            }

            entries.insert(name);
        }

        debug!(root = %root.display(), packages = entries.len(), "scanned dependency cache");
        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    /// Exact-name lookup
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

async fn is_directory(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}
