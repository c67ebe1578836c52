use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::models::manifest::VersionSpec;

/// What happened when a required output folder was ensured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryOutcome {
    pub path: PathBuf,
    pub status: DirectoryStatus,
}

/// A dependency copied from the cache into the staging folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledDependency {
    pub name: String,
    pub version: VersionSpec,
    /// A previous copy existed in the output and was removed first
    pub replaced: bool,
    /// Number of files copied for this dependency
    pub files: u64,
}

/// Outcome of bundling the manifest's dependencies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSummary {
    pub bundled: Vec<BundledDependency>,
    /// Declared in the manifest but absent from the dependency cache
    pub skipped: Vec<String>,
}

/// Summary of a completed module export, printed with `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub status: String,
    pub module: String,
    pub output_path: PathBuf,
    pub directories: Vec<DirectoryOutcome>,
    pub files_copied: Vec<String>,
    pub dependencies_bundled: Vec<BundledDependency>,
    pub dependencies_skipped: Vec<String>,
    pub exported_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl ExportReport {
    pub fn bundled_names(&self) -> Vec<&str> {
        self.dependencies_bundled.iter().map(|dep| dep.name.as_str()).collect()
    }

    pub fn replaced_count(&self) -> usize {
        self.dependencies_bundled.iter().filter(|dep| dep.replaced).count()
    }
}
