use std::path::{Path, PathBuf};
use crate::models::export_config::ExportConfig;
use crate::models::module_name::ModuleName;
use crate::utils::error::{ExportError, Result};

/// Every path an export reads from or writes to, resolved against the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    pub module: ModuleName,
    pub project_root: PathBuf,
    /// `{root}/src/{module}` - top-level files are copied from here
    pub source_path: PathBuf,
    /// `{root}/node_modules` - one folder per installed dependency
    pub dependency_cache_path: PathBuf,
    /// `{root}/package.json`
    pub manifest_path: PathBuf,
    /// `{root}/output/{module}`
    pub output_path: PathBuf,
    /// `{output}/module_builder`, left empty
    pub builder_path: PathBuf,
    /// `{output}/node_modules`, receives bundled dependencies
    pub staging_path: PathBuf,
    pub allow_missing_dependencies: bool,
}

impl ExportLayout {
    pub fn resolve(project_root: &Path, config: &ExportConfig, module: ModuleName) -> Self {
        let output_path = project_root.join(&config.output_dir).join(module.as_str());

        Self {
            source_path: project_root.join(&config.source_dir).join(module.as_str()),
            dependency_cache_path: project_root.join(&config.dependency_cache),
            manifest_path: project_root.join(&config.manifest),
            builder_path: output_path.join(&config.builder_dir),
            staging_path: output_path.join(&config.staging_dir),
            output_path,
            project_root: project_root.to_path_buf(),
            allow_missing_dependencies: config.allow_missing_dependencies,
            module,
        }
    }

    /// Reject layouts whose output folder is the module's own source folder
    ///
    /// Copying a file onto itself truncates it, so such an export would
    /// empty every source file.
    pub fn validate(&self) -> Result<()> {
        if self.output_path == self.source_path {
            return Err(ExportError::ConfigError(format!(
                "Output folder '{}' is the module's source folder; choose a different output_dir",
                self.output_path.display()
            )));
        }
        Ok(())
    }

    /// Destination of a bundled dependency inside the staging folder
    pub fn staged_dependency_path(&self, name: &str) -> PathBuf {
        self.staging_path.join(name)
    }

    /// Location of a dependency inside the local cache
    pub fn cached_dependency_path(&self, name: &str) -> PathBuf {
        self.dependency_cache_path.join(name)
    }
}
