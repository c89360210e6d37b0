use crate::domain::model::SeedLayout;
use crate::utils::error::{Result, SeedError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: Vec<String>,
    pub skipped: Vec<String>,
}

/// Deletes the seed's own files, then its folders if they ended up empty.
pub fn remove_bootstrap(project_root: &Path, layout: &SeedLayout) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();

    for file in &layout.bootstrap_files {
        let path = project_root.join(file);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                report.removed.push(file.clone());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} already gone", path.display());
                report.skipped.push(file.clone());
            }
            Err(e) => return Err(SeedError::fs(&path, e)),
        }
    }

    for dir in &layout.bootstrap_dirs {
        let path = project_root.join(dir);
        if !path.is_dir() {
            report.skipped.push(dir.clone());
            continue;
        }

        let is_empty = fs::read_dir(&path)
            .map_err(|e| SeedError::fs(&path, e))?
            .next()
            .is_none();
        if !is_empty {
            tracing::warn!("{} is not empty, leaving it in place", path.display());
            report.skipped.push(dir.clone());
            continue;
        }

        fs::remove_dir(&path).map_err(|e| SeedError::fs(&path, e))?;
        tracing::debug!("Removed {}", path.display());
        report.removed.push(dir.clone());
    }

    Ok(report)
}
