use crate::core::cleanup::remove_bootstrap;
use crate::core::copy::{copy_file, copy_tree};
use crate::core::guard::check_targets;
use crate::core::messages::{guidance_lines, RULE};
use crate::core::patch::{patch_app_config, patch_file, patch_front_controller};
use crate::domain::model::{AppDescriptor, InstallOutcome, SeedLayout, UpdateStatus};
use crate::domain::ports::{ConfigProvider, Console, DependencyUpdater};
use crate::utils::error::{Result, SeedError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct Installer<U: DependencyUpdater, C: Console> {
    project_root: PathBuf,
    updater: U,
    console: C,
    remove_bootstrap: bool,
}

impl<U: DependencyUpdater, C: Console> Installer<U, C> {
    pub fn new(project_root: impl Into<PathBuf>, updater: U, console: C) -> Self {
        Self {
            project_root: project_root.into(),
            updater,
            console,
            remove_bootstrap: true,
        }
    }

    /// Leave the seed's own files in place after installing.
    pub fn keep_bootstrap(mut self) -> Self {
        self.remove_bootstrap = false;
        self
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn updater(&self) -> &U {
        &self.updater
    }

    pub fn run<P: ConfigProvider>(&mut self, config: &P) -> Result<InstallOutcome> {
        let apps = config.apps();
        let layout = config.layout();

        self.console.write(RULE);
        self.console.write("Checking for all app folders were not exist ...");

        let report = check_targets(&self.project_root, apps);
        if !report.is_safe() {
            for line in report.diagnostics() {
                self.console.write(&line);
            }
            self.console.write(
                "Not safe for install. Please remove all exist application folder and its doc_root",
            );
            self.console.write("Exit with error");
            tracing::warn!("Aborted: {} target(s) already exist", report.conflicts.len());
            return Ok(InstallOutcome::Aborted {
                conflicts: report.conflicts,
            });
        }

        self.console.write(RULE);
        self.console.write("Begin copy CodeIgniter files ...");

        let mut files_copied = 0;
        for app in apps {
            files_copied += self.scaffold_app(app, layout)?;
        }

        let manifest_template = self.project_root.join(&layout.manifest_template);
        copy_file(&manifest_template, &self.project_root.join(&layout.manifest))?;
        tracing::info!("Replaced {} with {}", layout.manifest, layout.manifest_template);

        self.run_update();

        for line in guidance_lines(apps) {
            self.console.write(&line);
        }

        if self.remove_bootstrap {
            let cleanup = remove_bootstrap(&self.project_root, layout)?;
            tracing::info!("Removed {} bootstrap artifact(s)", cleanup.removed.len());
        }

        Ok(InstallOutcome::Installed {
            apps: apps.len(),
            files_copied,
        })
    }

    /// Creates one app's folders and patches its copies. Returns the number of files written.
    fn scaffold_app(&self, app: &AppDescriptor, layout: &SeedLayout) -> Result<usize> {
        let root = &self.project_root;
        let source = root.join(app.source_path());
        let doc_root = root.join(app.doc_root_path());
        tracing::info!("Scaffolding {} (doc_root {})", app.source, app.doc_root);

        create_dir(&source)?;
        create_dir(&doc_root)?;

        let stats = copy_tree(&root.join(layout.application_template()), &source)?;

        let index = doc_root.join("index.php");
        copy_file(&root.join(layout.front_controller()), &index)?;
        copy_file(&root.join(&layout.htaccess_template), &doc_root.join(".htaccess"))?;
        copy_file(&root.join(layout.gitignore_template()), &root.join(".gitignore"))?;

        patch_file(&index, |text| patch_front_controller(text, app, layout))?;
        patch_file(&source.join("config").join("config.php"), |text| {
            patch_app_config(text, app)
        })?;

        Ok(stats.files + 3)
    }

    fn run_update(&self) {
        match self.updater.update(&self.project_root) {
            Ok(UpdateStatus::Succeeded) => tracing::info!("Dependency update finished"),
            Ok(UpdateStatus::Skipped) => tracing::info!("Dependency update skipped"),
            Ok(UpdateStatus::Failed(code)) => {
                tracing::warn!("Dependency update exited with status {:?}", code)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                tracing::warn!("Suggestion: {}", e.recovery_suggestion());
            }
        }
    }

    /// Steps `run` would take, without touching the filesystem.
    pub fn plan<P: ConfigProvider>(&self, config: &P) -> Vec<String> {
        let layout = config.layout();
        let report = check_targets(&self.project_root, config.apps());
        if !report.is_safe() {
            let mut lines = report.diagnostics();
            lines.push("Install would abort; nothing else would happen".to_string());
            return lines;
        }

        let mut steps = Vec::new();
        for app in config.apps() {
            let doc_root = app.doc_root.trim_end_matches('/');
            steps.push(format!("create {} and {}", app.source, app.doc_root));
            steps.push(format!(
                "copy {} -> {}",
                layout.application_template().display(),
                app.source
            ));
            steps.push(format!(
                "copy {} -> {}/index.php",
                layout.front_controller().display(),
                doc_root
            ));
            steps.push(format!("copy {} -> {}/.htaccess", layout.htaccess_template, doc_root));
            steps.push(format!("copy {} -> .gitignore", layout.gitignore_template().display()));
            steps.push(format!("patch {}/index.php", doc_root));
            steps.push(format!(
                "patch {}/config/config.php",
                app.source.trim_end_matches('/')
            ));
        }
        steps.push(format!("copy {} -> {}", layout.manifest_template, layout.manifest));
        steps.push(format!("run `{} update`", layout.composer_program));
        if self.remove_bootstrap {
            steps.push(format!(
                "remove {}",
                layout
                    .bootstrap_files
                    .iter()
                    .chain(&layout.bootstrap_dirs)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        steps
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| SeedError::fs(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::core::composer::SkipUpdate;
    use crate::domain::ports::BufferConsole;
    use tempfile::TempDir;

    #[test]
    fn test_abort_writes_diagnostics_and_touches_nothing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();

        let mut installer = Installer::new(dir.path(), SkipUpdate, BufferConsole::default());
        let outcome = installer.run(&SeedConfig::with_defaults()).unwrap();

        assert_eq!(
            outcome,
            InstallOutcome::Aborted {
                conflicts: vec!["public".to_string()]
            }
        );
        let console = installer.console();
        assert!(console.contains("Folder public is already exist."));
        assert!(console.contains("Exit with error"));
        assert!(!dir.path().join("application").exists());
    }

    #[test]
    fn test_plan_lists_steps_for_each_app() {
        let dir = TempDir::new().unwrap();
        let installer = Installer::new(dir.path(), SkipUpdate, BufferConsole::default());
        let steps = installer.plan(&SeedConfig::with_defaults());

        assert!(steps.contains(&"patch public/index.php".to_string()));
        assert!(steps.contains(&"copy composer.json.dist -> composer.json".to_string()));
        assert!(steps.last().unwrap().starts_with("remove src/ProjectSeed.php"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
