use std::io::ErrorKind;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tokio::fs;
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::validate_module_name;

/// A module folder found under the source root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    /// Top-level files that an export would copy
    pub files: usize,
    /// An output folder for this module already exists
    pub exported: bool,
}

/// Lists the modules that can be exported from a project
pub struct ModuleCatalog;

impl ModuleCatalog {
    /// Every folder directly under `source_root`, sorted by name
    pub async fn list(source_root: &Path, output_root: &Path) -> Result<Vec<ModuleEntry>> {
        let mut dir = match fs::read_dir(source_root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ExportError::SourceNotFound(source_root.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut modules = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if validate_module_name(&name).is_err() {
                continue;
            }

            let mut files = 0;
            let mut module_dir = fs::read_dir(entry.path()).await?;
            while let Some(file) = module_dir.next_entry().await? {
                if fs::metadata(file.path()).await.map(|m| m.is_file()).unwrap_or(false) {
                    files += 1;
                }
            }

            let exported = fs::metadata(output_root.join(&name)).await
                .map(|m| m.is_dir())
                .unwrap_or(false);

            modules.push(ModuleEntry { name, files, exported });
        }

        modules.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(modules)
    }
}
