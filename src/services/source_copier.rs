use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use crate::utils::error::{ExportError, Result};
use crate::utils::fs_utils::copy_file;
use crate::utils::progress::Progress;

/// Copies a module's top-level files into the output folder
#[derive(Debug, Clone)]
pub struct SourceCopier {
    progress: Progress,
}

impl SourceCopier {
    pub const fn new(progress: Progress) -> Self {
        Self { progress }
    }

    /// Copy every regular file directly inside `source` to `output`
    ///
    /// Subfolders are not recursed into. Returns the copied file names, sorted.
    pub async fn copy_files(&self, source: &Path, output: &Path) -> Result<Vec<String>> {
        self.progress.section("COPYING FILES");

        match fs::metadata(source).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(ExportError::SourceNotFound(source.to_path_buf())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ExportError::SourceNotFound(source.to_path_buf()));
            }
            Err(e) => return Err(ExportError::IoError(e)),
        }

        // Catches output folders that reach the source through a symlink
        if let (Ok(source_real), Ok(output_real)) =
            (fs::canonicalize(source).await, fs::canonicalize(output).await)
        {
            if source_real == output_real {
                return Err(ExportError::ConfigError(format!(
                    "Output folder '{}' is the module's source folder; choose a different output_dir",
                    output.display()
                )));
            }
        }

        let mut files = Vec::new();
        let mut entries = fs::read_dir(source).await?;
        while let Some(entry) = entries.next_entry().await? {
            // metadata() follows symlinks, so a link to a file counts as a file
            let is_file = fs::metadata(entry.path()).await
                .map(|m| m.is_file())
                .unwrap_or(false);
            if is_file {
                files.push(entry.file_name());
            }
        }
        files.sort();

        let mut copied = Vec::with_capacity(files.len());
        for name in files {
            let from = source.join(&name);
            let to = output.join(&name);

            self.progress.line(format!(
                "Copying '{}' to output folder ('{}')",
                from.display(),
                to.display()
            ));
            copy_file(&from, &to).await?;
            copied.push(name.to_string_lossy().into_owned());
        }

        Ok(copied)
    }
}
