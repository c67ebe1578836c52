use tracing::{debug, info};
use crate::models::export_layout::ExportLayout;
use crate::models::export_report::{BundleSummary, BundledDependency};
use crate::models::manifest::Manifest;
use crate::services::dependency_cache::DependencyCache;
use crate::utils::error::{ExportError, Result};
use crate::utils::fs_utils::{copy_tree, path_exists, remove_path};
use crate::utils::progress::Progress;

/// Copies the manifest's dependencies from the local cache into the output's staging folder
#[derive(Debug, Clone)]
pub struct DependencyBundler {
    progress: Progress,
}

impl DependencyBundler {
    pub const fn new(progress: Progress) -> Self {
        Self { progress }
    }

    /// Bundle every dependency the cache can provide
    ///
    /// Dependencies missing from the cache are reported and skipped. A
    /// previous copy in the staging folder is removed before copying again,
    /// so nothing stale survives.
    pub async fn bundle(&self, layout: &ExportLayout, manifest: &Manifest) -> Result<BundleSummary> {
        let mut summary = BundleSummary::default();
        if !manifest.has_dependencies() {
            debug!("manifest declares no dependencies");
            return Ok(summary);
        }

        self.progress.section("BUNDLING DEPENDENCIES");
        let cache = DependencyCache::scan(&layout.dependency_cache_path).await?;
        let cache_label = layout
            .dependency_cache_path
            .file_name()
            .map_or_else(|| "node_modules".into(), |name| name.to_string_lossy());
        let staging = format!("{}/", layout.staging_path.display());

        for (name, version) in &manifest.dependencies {
            if !cache.contains(name) {
                self.progress.line(format!("{name} was not found in {cache_label}. Skipping..."));
                summary.skipped.push(name.clone());
                continue;
            }

            let source = cache.path_of(name);
            let destination = layout.staged_dependency_path(name);
            let replaced = path_exists(&destination).await;

            self.progress.line(format!("Copying '{}' to '{staging}'", source.display()));
            if replaced {
                self.progress.line(format!(
                    "Replacing existing dependency from '{}' to '{staging}'",
                    source.display()
                ));
                remove_path(&destination).await?;
            }

            // Scoped packages land in an @scope folder that may not exist yet
            if let Some(parent) = destination.parent() {
                tokio::fs::create_dir_all(parent).await
                    .map_err(|source| ExportError::DirectoryError { path: parent.to_path_buf(), source })?;
            }

            let files = copy_tree(&source, &destination).await?;
            info!(dependency = %name, version = %version, files, replaced, "bundled dependency");

            summary.bundled.push(BundledDependency {
                name: name.clone(),
                version: version.clone(),
                replaced,
                files,
            });
        }

        Ok(summary)
    }
}
