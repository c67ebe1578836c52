// Common validation utilities for modex CLI commands

use crate::utils::error::{ExportError, Result};
use std::path::{Component, Path};

/// Validate a module name: a single directory name under the source root
pub fn validate_module_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ExportError::ValidationError(
            "Module name cannot be empty.\n\nUsage: modex export <MODULE>\nExample: modex export sample_module".to_string()
        ));
    }

    if name == "." || name == ".." {
        return Err(ExportError::ValidationError(
            format!("Invalid module name '{name}' - must name a folder inside the source directory")
        ));
    }

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(ExportError::ValidationError(
            format!("Invalid module name '{name}' - cannot contain path separators.\n\nModule names are folder names:\n  ✓ sample_module\n  ✓ volume_controller\n  ✗ src/sample_module")
        ));
    }

    Ok(())
}

/// Validate a configured directory: relative to the project root, no `..`
pub fn validate_relative_dir(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExportError::ConfigError(
            format!("'{key}' cannot be empty")
        ));
    }

    let path = Path::new(value);
    if path.is_absolute() || path.has_root() {
        return Err(ExportError::ConfigError(
            format!("'{key}' must be relative to the project root (got '{value}')")
        ));
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ExportError::ConfigError(
            format!("'{key}' cannot contain '..' references (got '{value}')")
        ));
    }

    Ok(())
}

/// Validate a name used for a single folder inside the output tree
pub fn validate_folder_name(key: &str, value: &str) -> Result<()> {
    validate_relative_dir(key, value)?;

    if Path::new(value).components().count() != 1 {
        return Err(ExportError::ConfigError(
            format!("'{key}' must be a single folder name (got '{value}')")
        ));
    }

    Ok(())
}
