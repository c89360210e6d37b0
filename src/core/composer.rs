use crate::domain::model::UpdateStatus;
use crate::domain::ports::DependencyUpdater;
use crate::utils::error::{Result, SeedError};
use std::path::Path;
use std::process::Command;

/// Runs `<program> update` with the terminal attached.
#[derive(Debug, Clone)]
pub struct ComposerUpdater {
    program: String,
}

impl ComposerUpdater {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ComposerUpdater {
    fn default() -> Self {
        Self::new("composer")
    }
}

impl DependencyUpdater for ComposerUpdater {
    fn update(&self, project_root: &Path) -> Result<UpdateStatus> {
        tracing::info!("Running `{} update` in {}", self.program, project_root.display());

        let status = Command::new(&self.program)
            .arg("update")
            .current_dir(project_root)
            .status()
            .map_err(|e| SeedError::UpdateError {
                message: format!("could not start `{}`: {}", self.program, e),
            })?;

        if status.success() {
            Ok(UpdateStatus::Succeeded)
        } else {
            Ok(UpdateStatus::Failed(status.code()))
        }
    }
}

/// Stands in for the updater when the update step is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipUpdate;

impl DependencyUpdater for SkipUpdate {
    fn update(&self, _project_root: &Path) -> Result<UpdateStatus> {
        Ok(UpdateStatus::Skipped)
    }
}
