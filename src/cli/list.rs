// List command implementation

use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;
use crate::services::module_catalog::{ModuleCatalog, ModuleEntry};
use crate::utils::config::ConfigParser;
use crate::utils::error::{ExportError, Result};
use super::resolve_project_root;

/// List the modules that can be exported
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Project root containing the source directory
    #[arg(long)]
    pub project_root: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn run(&self) -> Result<()> {
        let project_root = resolve_project_root(self.project_root.as_deref())?;
        let config = ConfigParser::load_export_config(&project_root).await?;

        let modules = ModuleCatalog::list(
            &project_root.join(&config.source_dir),
            &project_root.join(&config.output_dir),
        ).await?;

        if self.json {
            let json_output = serde_json::to_string_pretty(&modules)
                .map_err(|e| ExportError::ValidationError(format!("Failed to serialize JSON response: {e}")))?;
            println!("{json_output}");
        } else {
            print!("{}", format_module_list(&modules));
        }

        Ok(())
    }
}

fn format_module_list(modules: &[ModuleEntry]) -> String {
    if modules.is_empty() {
        return "No modules found\n".to_string();
    }

    let width = modules.iter().map(|m| m.name.len()).max().unwrap_or(0);
    let mut output = String::from("Available modules:\n");
    for module in modules {
        let marker = if module.exported { "  (exported)" } else { "" };
        let noun = if module.files == 1 { "file" } else { "files" };
        let _ = writeln!(
            output,
            "  {:<width$}  {} {}{}",
            module.name, module.files, noun, marker
        );
    }
    output
}
