use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One scaffolded application: where its code lives and where its web root lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub source: String,
    pub doc_root: String,
}

impl AppDescriptor {
    pub fn new(source: impl Into<String>, doc_root: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            doc_root: doc_root.into(),
        }
    }

    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(self.source.trim_end_matches('/'))
    }

    pub fn doc_root_path(&self) -> PathBuf {
        PathBuf::from(self.doc_root.trim_end_matches('/'))
    }
}

impl Default for AppDescriptor {
    fn default() -> Self {
        Self::new("application", "public")
    }
}

pub fn default_apps() -> Vec<AppDescriptor> {
    vec![AppDescriptor::default()]
}

/// Fixed locations the installer reads from and cleans up, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedLayout {
    pub framework_dir: String,
    pub htaccess_template: String,
    pub manifest_template: String,
    pub manifest: String,
    pub bootstrap_files: Vec<String>,
    pub bootstrap_dirs: Vec<String>,
    pub composer_program: String,
}

impl Default for SeedLayout {
    fn default() -> Self {
        Self {
            framework_dir: "vendor/codeigniter/framework".to_string(),
            htaccess_template: "dot.htaccess".to_string(),
            manifest_template: "composer.json.dist".to_string(),
            manifest: "composer.json".to_string(),
            bootstrap_files: vec![
                "src/ProjectSeed.php".to_string(),
                "composer.json.dist".to_string(),
                "dot.htaccess".to_string(),
                "LICENSE.md".to_string(),
            ],
            bootstrap_dirs: vec!["src".to_string()],
            composer_program: "composer".to_string(),
        }
    }
}

impl SeedLayout {
    pub fn application_template(&self) -> PathBuf {
        PathBuf::from(&self.framework_dir).join("application")
    }

    pub fn front_controller(&self) -> PathBuf {
        PathBuf::from(&self.framework_dir).join("index.php")
    }

    pub fn gitignore_template(&self) -> PathBuf {
        PathBuf::from(&self.framework_dir).join(".gitignore")
    }

    /// Framework system folder as written into the front controller.
    pub fn system_dir(&self) -> String {
        format!("{}/system", self.framework_dir.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Target folders already existed; nothing was touched.
    Aborted { conflicts: Vec<String> },
    Installed { apps: usize, files_copied: usize },
}

impl InstallOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallOutcome::Installed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Succeeded,
    Failed(Option<i32>),
    Skipped,
}
