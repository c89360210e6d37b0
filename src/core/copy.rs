use crate::utils::error::{Result, SeedError};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub dirs: usize,
    pub files: usize,
    pub skipped_links: usize,
}

/// Recreates the tree under `src` inside `dst`, parents before children.
///
/// Symlinks are neither followed nor recreated; each one is skipped with a warning.
/// `dst` may already exist.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyStats> {
    if !src.is_dir() {
        return Err(SeedError::MissingTemplateError {
            path: src.to_path_buf(),
        });
    }

    fs::create_dir_all(dst).map_err(|e| SeedError::fs(dst, e))?;
    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| SeedError::ConfigError {
                message: format!("walked outside {}: {}", src.display(), e),
            })?;
        let target = dst.join(relative);

        if entry.path_is_symlink() {
            tracing::warn!("Skipping symlink {}", entry.path().display());
            stats.skipped_links += 1;
        } else if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|e| SeedError::fs(&target, e))?;
            stats.dirs += 1;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| SeedError::fs(&target, e))?;
            stats.files += 1;
        }
    }

    tracing::debug!(
        "Copied {} -> {} ({} dirs, {} files)",
        src.display(),
        dst.display(),
        stats.dirs,
        stats.files
    );
    Ok(stats)
}

/// Copies a single file, creating the destination's parent folder.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(SeedError::MissingTemplateError {
            path: src.to_path_buf(),
        });
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| SeedError::fs(parent, e))?;
    }

    fs::copy(src, dst).map_err(|e| SeedError::fs(dst, e))?;
    tracing::debug!("Copied {} -> {}", src.display(), dst.display());
    Ok(())
}
