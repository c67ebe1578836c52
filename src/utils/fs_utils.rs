// File system utilities

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::models::export_report::DirectoryStatus;
use crate::utils::error::{ExportError, Result};

/// Make sure `path` exists as a directory, creating parents as needed
///
/// An existing directory is not an error. An existing non-directory is.
pub async fn ensure_directory(path: &Path) -> Result<DirectoryStatus> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(DirectoryStatus::AlreadyExists),
        Ok(_) => Err(ExportError::DirectoryError {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::AlreadyExists, "path exists and is not a directory"),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(path).await
                .map_err(|source| ExportError::DirectoryError { path: path.to_path_buf(), source })?;
            Ok(DirectoryStatus::Created)
        }
        Err(source) => Err(ExportError::DirectoryError { path: path.to_path_buf(), source }),
    }
}

/// Copy a single file's contents to `to`, overwriting any existing file
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    fs::copy(from, to).await
        .map_err(|source| copy_error(from, to, source))
}

/// Recursively copy the directory `from` to `to`, returning the number of files copied
///
/// Symlinks are followed, so linked files and folders are copied as regular content.
pub async fn copy_tree(from: &Path, to: &Path) -> Result<u64> {
    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(from.to_path_buf(), to.to_path_buf())];
    let mut files = 0;

    while let Some((src_dir, dst_dir)) = pending.pop() {
        fs::create_dir_all(&dst_dir).await
            .map_err(|source| ExportError::DirectoryError { path: dst_dir.clone(), source })?;

        let mut entries = fs::read_dir(&src_dir).await
            .map_err(|source| copy_error(&src_dir, &dst_dir, source))?;

        while let Some(entry) = entries.next_entry().await
            .map_err(|source| copy_error(&src_dir, &dst_dir, source))?
        {
            let src = entry.path();
            let dst = dst_dir.join(entry.file_name());
            let metadata = fs::metadata(&src).await
                .map_err(|source| copy_error(&src, &dst, source))?;

            if metadata.is_dir() {
                pending.push((src, dst));
            } else {
                copy_file(&src, &dst).await?;
                files += 1;
            }
        }
    }

    debug!(from = %from.display(), to = %to.display(), files, "copied tree");
    Ok(files)
}

/// Remove a file or directory tree; returns once the removal has completed
pub async fn remove_path(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).await?;
    if metadata.is_dir() {
        fs::remove_dir_all(path).await?;
    } else {
        fs::remove_file(path).await?;
    }
    Ok(())
}

/// Whether anything (file, directory or symlink) exists at `path`
pub async fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).await.is_ok()
}

fn copy_error(from: &Path, to: &Path, source: std::io::Error) -> ExportError {
    ExportError::CopyError {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}
