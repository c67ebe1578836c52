// Common error types for modex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Module source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to copy '{}' to '{}': {source}", from.display(), to.display())]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open {}: {source}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open {}: file is empty", .0.display())]
    ManifestEmpty(PathBuf),

    #[error("Malformed manifest {}: {reason}", path.display())]
    MalformedManifest { path: PathBuf, reason: String },
}

impl ExportError {
    /// Whether the error came from reading or parsing the manifest
    pub const fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            Self::ManifestUnreadable { .. } | Self::ManifestEmpty(_) | Self::MalformedManifest { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// User-facing rendering of an [`ExportError`] with a process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub const EXIT_FAILURE: i32 = 1;
    pub const EXIT_CONFIG: i32 = 2;
    pub const EXIT_MANIFEST: i32 = 3;

    pub fn from_export_error(err: &ExportError) -> Self {
        let (hint, exit_code) = match err {
            ExportError::ConfigError(_) => (
                Some("Check modex.toml or pass the module name explicitly: modex export <MODULE>".to_string()),
                Self::EXIT_CONFIG,
            ),
            ExportError::ValidationError(_) => (None, Self::EXIT_CONFIG),
            ExportError::SourceNotFound(_) => (
                Some("Run `modex list` to see the modules available for export".to_string()),
                Self::EXIT_FAILURE,
            ),
            ExportError::ManifestUnreadable { .. } | ExportError::ManifestEmpty(_) => (
                Some("A package.json with a \"dependencies\" object is required at the project root".to_string()),
                Self::EXIT_MANIFEST,
            ),
            ExportError::MalformedManifest { .. } => (
                Some("Use --allow-missing-dependencies to export a module without dependencies".to_string()),
                Self::EXIT_MANIFEST,
            ),
            ExportError::IoError(_) | ExportError::DirectoryError { .. } | ExportError::CopyError { .. } => {
                (None, Self::EXIT_FAILURE)
            }
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    /// Print the error (and hint, if any) to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("  hint: {hint}");
        }
    }
}
