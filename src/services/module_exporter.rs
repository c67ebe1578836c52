use std::time::Instant;
use chrono::Utc;
use tracing::info;
use crate::models::export_layout::ExportLayout;
use crate::models::export_report::ExportReport;
use crate::services::dependency_bundler::DependencyBundler;
use crate::services::directory_initializer::DirectoryInitializer;
use crate::services::manifest_loader::ManifestLoader;
use crate::services::source_copier::SourceCopier;
use crate::utils::error::Result;
use crate::utils::progress::Progress;

/// Runs a full module export: folders, source files, manifest, dependencies
#[derive(Debug, Clone)]
pub struct ModuleExporter {
    layout: ExportLayout,
    progress: Progress,
}

impl ModuleExporter {
    pub const fn new(layout: ExportLayout, progress: Progress) -> Self {
        Self { layout, progress }
    }

    /// Export the module
    ///
    /// Steps run strictly in order and the first fatal error stops the run.
    /// The manifest is read after the source files are copied, so a bad
    /// manifest leaves the copied files in place but bundles nothing.
    pub async fn export(&self) -> Result<ExportReport> {
        let start_time = Instant::now();
        let layout = &self.layout;
        info!(module = %layout.module, output = %layout.output_path.display(), "exporting module");

        let directories = DirectoryInitializer::new(self.progress)
            .initialize(layout)
            .await?;

        let files_copied = SourceCopier::new(self.progress)
            .copy_files(&layout.source_path, &layout.output_path)
            .await?;

        let manifest = ManifestLoader::load(&layout.manifest_path, layout.allow_missing_dependencies).await?;

        let summary = DependencyBundler::new(self.progress)
            .bundle(layout, &manifest)
            .await?;

        self.progress.section("FINISHED BUNDLING MODULE");

        Ok(ExportReport {
            status: "success".to_string(),
            module: layout.module.to_string(),
            output_path: layout.output_path.clone(),
            directories,
            files_copied,
            dependencies_bundled: summary.bundled,
            dependencies_skipped: summary.skipped,
            exported_at: Utc::now(),
            duration_ms: u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
        })
    }
}
