// Export command implementation
// Bundles a module's files and dependencies into the output folder

use clap::Args;
use std::path::PathBuf;
use crate::models::export_config::ExportOverrides;
use crate::models::export_layout::ExportLayout;
use crate::models::export_report::ExportReport;
use crate::models::module_name::ModuleName;
use crate::services::module_exporter::ModuleExporter;
use crate::utils::config::ConfigParser;
use crate::utils::error::{ExportError, Result};
use crate::utils::progress::Progress;
use super::resolve_project_root;

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Module folder under the source directory (default: `module` in modex.toml)
    pub module: Option<String>,
    /// Project root containing src/, node_modules/ and package.json
    #[arg(long)]
    pub project_root: Option<PathBuf>,
    /// Folder to write exported modules to, relative to the project root
    #[arg(long)]
    pub output_dir: Option<String>,
    /// Treat a package.json without "dependencies" as having none
    #[arg(long)]
    pub allow_missing_dependencies: bool,
    /// Output the export report as JSON
    #[arg(long)]
    pub json: bool,
    /// Suppress progress output
    #[arg(long, short)]
    pub quiet: bool,
}

impl ExportCommand {
    pub async fn run(&self) -> Result<()> {
        let layout = self.resolve_layout().await?;
        let progress = Progress::new(!self.json && !self.quiet);

        let report = ModuleExporter::new(layout, progress).export().await?;

        if self.json {
            self.output_json_response(&report)
        } else {
            Ok(())
        }
    }

    /// Merge modex.toml with the command-line flags and resolve every path
    pub async fn resolve_layout(&self) -> Result<ExportLayout> {
        let project_root = resolve_project_root(self.project_root.as_deref())?;

        let config = ConfigParser::load_export_config(&project_root).await?
            .with_overrides(ExportOverrides {
                module: self.module.clone(),
                output_dir: self.output_dir.clone(),
                allow_missing_dependencies: self.allow_missing_dependencies,
            });
        ConfigParser::validate_config(&config)?;

        let module = match config.module.as_deref() {
            Some(name) => ModuleName::new(name)?,
            None => {
                return Err(ExportError::ConfigError(
                    "No module to export (pass a module name or set `module` in modex.toml)".to_string()
                ));
            }
        };

        let layout = ExportLayout::resolve(&project_root, &config, module);
        layout.validate()?;
        Ok(layout)
    }

    fn output_json_response(&self, report: &ExportReport) -> Result<()> {
        let json_output = serde_json::to_string_pretty(report)
            .map_err(|e| ExportError::ValidationError(format!("Failed to serialize JSON response: {e}")))?;

        println!("{json_output}");
        Ok(())
    }
}
