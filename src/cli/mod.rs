// CLI module for command-line interface

pub mod export;
pub mod list;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use crate::utils::error::{ExportError, Result};

use self::export::ExportCommand;
use self::list::ListCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "modex")]
#[command(about = "Bundle a module and its npm dependencies for external installation")]
#[command(long_about = r#"modex packages a single module's source files together with the
dependencies declared in package.json, producing a folder that can be copied
into the host application's external modules directory.

Layout consumed (relative to the project root):
  src/<module>/     Module source files (top-level files only)
  node_modules/     Installed dependencies
  package.json      Manifest with a "dependencies" object

Layout produced:
  output/<module>/                  Copied source files
  output/<module>/module_builder/   Empty placeholder
  output/<module>/node_modules/     Bundled dependencies

Examples:
  modex export sample_module      Export src/sample_module
  modex export --json             Export the module named in modex.toml
  modex list                      Show modules available for export

Then copy output/<module> to {HOME}/.modules/external_modules"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Export a module with its dependencies into the output folder
    #[command(long_about = r#"Export a module with its dependencies into the output folder.

Creates output/<module>/ with an empty module_builder/ folder and a
node_modules/ folder, copies the module's top-level files, then copies
every dependency from package.json that is installed in node_modules/.
Dependencies that are not installed are skipped. A dependency already
present in the output is replaced with a fresh copy.

Settings can be stored in modex.toml at the project root:
  module = "sample_module"
  output_dir = "output"
  allow_missing_dependencies = false

Examples:
  modex export sample_module
  modex export sample_module --project-root ../host-app
  modex export --output-dir dist --json"#)]
    Export(ExportCommand),

    /// List modules that can be exported
    List(ListCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Export(cmd) => cmd.run().await,
            Commands::List(cmd) => cmd.run().await,
        }
    }
}

/// The given project root, or the current directory
pub fn resolve_project_root(project_root: Option<&Path>) -> Result<PathBuf> {
    match project_root {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().map_err(ExportError::IoError),
    }
}
