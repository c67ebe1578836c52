use std::path::Path;
use tracing::debug;
use crate::models::export_layout::ExportLayout;
use crate::models::export_report::{DirectoryOutcome, DirectoryStatus};
use crate::utils::error::Result;
use crate::utils::fs_utils::ensure_directory;
use crate::utils::progress::Progress;

/// Creates the output tree: the module folder, the builder placeholder and the staging folder
#[derive(Debug, Clone)]
pub struct DirectoryInitializer {
    progress: Progress,
}

impl DirectoryInitializer {
    pub const fn new(progress: Progress) -> Self {
        Self { progress }
    }

    /// Ensure the output root and its two subfolders exist
    ///
    /// Folders that already exist are reported and skipped; any other
    /// failure aborts the export.
    pub async fn initialize(&self, layout: &ExportLayout) -> Result<Vec<DirectoryOutcome>> {
        self.progress.section("CREATING FOLDERS");

        let mut outcomes = Vec::with_capacity(3);
        for path in [&layout.output_path, &layout.builder_path, &layout.staging_path] {
            outcomes.push(self.ensure(path).await?);
        }

        Ok(outcomes)
    }

    async fn ensure(&self, path: &Path) -> Result<DirectoryOutcome> {
        let status = ensure_directory(path).await?;

        match status {
            DirectoryStatus::Created => debug!(path = %path.display(), "created folder"),
            DirectoryStatus::AlreadyExists => self.progress.line(format!(
                "Skipping creation of {}; folder already exists",
                path.display()
            )),
        }

        Ok(DirectoryOutcome {
            path: path.to_path_buf(),
            status,
        })
    }
}
