use serde::{Deserialize, Serialize};

/// Name of the optional configuration file at the project root
pub const CONFIG_FILE_NAME: &str = "modex.toml";

/// Layout configuration for a module export, as read from `modex.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Module exported when none is given on the command line
    pub module: Option<String>,
    /// Folder holding one subfolder per module (relative to project root)
    pub source_dir: String,
    /// Folder the exported module trees are written to
    pub output_dir: String,
    /// Locally installed dependencies, one folder per package
    pub dependency_cache: String,
    /// JSON manifest declaring the project's dependencies
    pub manifest: String,
    /// Empty placeholder folder created inside the exported module
    pub builder_dir: String,
    /// Folder inside the exported module that receives bundled dependencies
    pub staging_dir: String,
    /// Treat a manifest without a `dependencies` field as having none
    pub allow_missing_dependencies: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            module: None,
            source_dir: "src".to_string(),
            output_dir: "output".to_string(),
            dependency_cache: "node_modules".to_string(),
            manifest: "package.json".to_string(),
            builder_dir: "module_builder".to_string(),
            staging_dir: "node_modules".to_string(),
            allow_missing_dependencies: false,
        }
    }
}

/// Values supplied on the command line that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOverrides {
    pub module: Option<String>,
    pub output_dir: Option<String>,
    pub allow_missing_dependencies: bool,
}

impl ExportConfig {
    /// Apply command-line overrides on top of this configuration
    #[must_use]
    pub fn with_overrides(mut self, overrides: ExportOverrides) -> Self {
        if overrides.module.is_some() {
            self.module = overrides.module;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if overrides.allow_missing_dependencies {
            self.allow_missing_dependencies = true;
        }
        self
    }
}
