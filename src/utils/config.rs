// Configuration utilities and TOML parsing

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::models::export_config::{ExportConfig, CONFIG_FILE_NAME};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{validate_folder_name, validate_relative_dir};

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load `modex.toml` from the project root, falling back to defaults when absent
    pub async fn load_export_config<P: AsRef<Path>>(project_root: P) -> Result<ExportConfig> {
        let path = get_config_path(project_root.as_ref());

        if !fs::try_exists(&path).await.unwrap_or(false) {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ExportConfig::default());
        }

        let content = fs::read_to_string(&path).await
            .map_err(|e| ExportError::ConfigError(
                format!("Failed to read {}: {}", path.display(), e)
            ))?;

        debug!(path = %path.display(), "loaded config file");
        Self::parse_export_config(&content)
    }

    /// Parse export configuration from a TOML string and validate it
    pub fn parse_export_config(content: &str) -> Result<ExportConfig> {
        let config: ExportConfig = toml::from_str(content)
            .map_err(|e| ExportError::ConfigError(
                format!("Invalid TOML in {CONFIG_FILE_NAME}: {e}")
            ))?;

        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Validate that every configured location stays inside the project root
    pub fn validate_config(config: &ExportConfig) -> Result<()> {
        validate_relative_dir("source_dir", &config.source_dir)?;
        validate_relative_dir("output_dir", &config.output_dir)?;
        validate_relative_dir("dependency_cache", &config.dependency_cache)?;
        validate_relative_dir("manifest", &config.manifest)?;

        // These two live directly inside the exported module folder
        validate_folder_name("builder_dir", &config.builder_dir)?;
        validate_folder_name("staging_dir", &config.staging_dir)?;

        if config.builder_dir == config.staging_dir {
            return Err(ExportError::ConfigError(
                format!("'builder_dir' and 'staging_dir' must differ (both are '{}')", config.builder_dir)
            ));
        }

        Ok(())
    }
}

pub fn get_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}
