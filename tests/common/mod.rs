#![allow(dead_code)]

use project_seed::domain::model::UpdateStatus;
use project_seed::domain::ports::DependencyUpdater;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INDEX_PHP: &str = r#"<?php
define('ENVIRONMENT', isset($_SERVER['CI_ENV']) ? $_SERVER['CI_ENV'] : 'development');

	$system_path = 'system';

	$application_folder = 'application';

	$view_folder = '';

require_once BASEPATH.'core/CodeIgniter.php';
"#;

pub const CONFIG_PHP: &str = r#"<?php
defined('BASEPATH') OR exit('No direct script access allowed');

$config['base_url'] = '';
$config['index_page'] = 'index.php';
$config['composer_autoload'] = FALSE;
"#;

/// A project as it looks right after `composer create-project` of the seed.
pub struct FixtureProject {
    pub dir: TempDir,
}

impl FixtureProject {
    pub fn new(manifest: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let framework = root.join("vendor/codeigniter/framework");

        write(&framework.join("index.php"), INDEX_PHP);
        write(&framework.join(".gitignore"), "/vendor/\n/application/logs/*\n");
        write(&framework.join("application/config/config.php"), CONFIG_PHP);
        write(&framework.join("application/config/routes.php"), "<?php\n");
        write(
            &framework.join("application/controllers/Welcome.php"),
            "<?php\nclass Welcome extends CI_Controller {}\n",
        );
        write(&framework.join("application/views/welcome_message.php"), "<h1>Welcome</h1>\n");
        fs::create_dir_all(framework.join("application/logs")).unwrap();

        write(&root.join("composer.json"), manifest);
        write(
            &root.join("composer.json.dist"),
            r#"{"require": {"codeigniter/framework": "3.1.*"}}"#,
        );
        write(&root.join("dot.htaccess"), "RewriteEngine On\n");
        write(&root.join("LICENSE.md"), "MIT\n");
        write(&root.join("src/ProjectSeed.php"), "<?php\n");

        Self { dir }
    }

    pub fn with_default_manifest() -> Self {
        Self::new(r#"{"name": "kenjis/codeigniter-composer-installer"}"#)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Every path under the root, sorted, excluding `vendor/`.
    pub fn snapshot(&self) -> Vec<String> {
        let mut entries: Vec<String> = walkdir::WalkDir::new(self.root())
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| {
                e.path()
                    .strip_prefix(self.root())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .filter(|p| !p.starts_with("vendor"))
            .collect();
        entries.sort();
        entries
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Records calls instead of running the dependency manager.
#[derive(Default)]
pub struct RecordingUpdater {
    pub calls: RefCell<Vec<PathBuf>>,
    pub status: Option<UpdateStatus>,
}

impl DependencyUpdater for RecordingUpdater {
    fn update(&self, project_root: &Path) -> project_seed::Result<UpdateStatus> {
        self.calls.borrow_mut().push(project_root.to_path_buf());
        Ok(self.status.unwrap_or(UpdateStatus::Succeeded))
    }
}
