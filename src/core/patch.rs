//! Literal rewrites applied to the generated front controller and app config.

use crate::domain::model::{AppDescriptor, SeedLayout};
use crate::utils::error::{Result, SeedError};
use std::path::Path;

const SYSTEM_PATH: &str = "$system_path = 'system';";
const APPLICATION_FOLDER: &str = "$application_folder = 'application';";
const COMPOSER_AUTOLOAD: &str = "$config['composer_autoload'] = FALSE;";
const INDEX_PAGE: &str = "$config['index_page'] = 'index.php';";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub text: String,
    /// Needles that did not occur in the input.
    pub missing: Vec<&'static str>,
}

/// `..` once per path segment, so `web/public` becomes `../..`.
pub fn relative_prefix(path: &str) -> String {
    let ups: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .map(|_| "..")
        .collect();

    if ups.is_empty() {
        ".".to_string()
    } else {
        ups.join("/")
    }
}

fn replace_all(text: &str, rules: &[(&'static str, String)]) -> Patched {
    let mut text = text.to_string();
    let mut missing = Vec::new();

    for (needle, replacement) in rules {
        if text.contains(needle) {
            text = text.replace(needle, replacement);
        } else {
            missing.push(*needle);
        }
    }

    Patched { text, missing }
}

/// Points `index.php` at the vendored system folder and the app's source folder.
pub fn patch_front_controller(text: &str, app: &AppDescriptor, layout: &SeedLayout) -> Patched {
    let up = relative_prefix(&app.doc_root);
    replace_all(
        text,
        &[
            (
                SYSTEM_PATH,
                format!("$system_path = '{}/{}';", up, layout.system_dir()),
            ),
            (
                APPLICATION_FOLDER,
                format!(
                    "$application_folder = '{}/{}';",
                    up,
                    app.source.trim_matches('/')
                ),
            ),
        ],
    )
}

/// Enables the Composer autoloader and blanks `index_page` in `config/config.php`.
pub fn patch_app_config(text: &str, app: &AppDescriptor) -> Patched {
    // Counted from `source`, not `doc_root`: APPPATH is the source folder.
    let up = relative_prefix(&app.source);
    replace_all(
        text,
        &[
            (
                COMPOSER_AUTOLOAD,
                format!(
                    "$config['composer_autoload'] = realpath(APPPATH . '{}/vendor/autoload.php');",
                    up
                ),
            ),
            (INDEX_PAGE, "$config['index_page'] = '';".to_string()),
        ],
    )
}

/// Reads `path`, applies `patch` and writes the result back.
pub fn patch_file<F>(path: &Path, patch: F) -> Result<Patched>
where
    F: FnOnce(&str) -> Patched,
{
    let contents = std::fs::read_to_string(path).map_err(|e| SeedError::fs(path, e))?;
    let patched = patch(&contents);
    std::fs::write(path, &patched.text).map_err(|e| SeedError::fs(path, e))?;

    for needle in &patched.missing {
        tracing::warn!("{}: `{}` not found, left unchanged", path.display(), needle);
    }
    Ok(patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_PHP: &str = "<?php\n\t$system_path = 'system';\n\t$application_folder = 'application';\n\t$view_folder = '';\n";
    const CONFIG_PHP: &str = "<?php\n$config['index_page'] = 'index.php';\n$config['composer_autoload'] = FALSE;\n";

    #[test]
    fn test_relative_prefix() {
        assert_eq!(relative_prefix("public"), "..");
        assert_eq!(relative_prefix("/web/public/"), "../..");
        assert_eq!(relative_prefix("a/b/c"), "../../..");
    }

    #[test]
    fn test_patch_front_controller_default_app() {
        let patched =
            patch_front_controller(INDEX_PHP, &AppDescriptor::default(), &SeedLayout::default());

        assert!(patched.missing.is_empty());
        assert!(patched
            .text
            .contains("$system_path = '../vendor/codeigniter/framework/system';"));
        assert!(patched.text.contains("$application_folder = '../application';"));
        assert!(patched.text.contains("$view_folder = '';"));
    }

    #[test]
    fn test_patch_front_controller_nested_doc_root() {
        let app = AppDescriptor::new("apps/admin", "web/admin");
        let patched = patch_front_controller(INDEX_PHP, &app, &SeedLayout::default());

        assert!(patched
            .text
            .contains("$system_path = '../../vendor/codeigniter/framework/system';"));
        assert!(patched.text.contains("$application_folder = '../../apps/admin';"));
    }

    #[test]
    fn test_patch_app_config() {
        let app = AppDescriptor::new("apps/site", "public");
        let patched = patch_app_config(CONFIG_PHP, &app);

        assert!(patched.missing.is_empty());
        assert!(patched.text.contains(
            "$config['composer_autoload'] = realpath(APPPATH . '../../vendor/autoload.php');"
        ));
        assert!(patched.text.contains("$config['index_page'] = '';"));
        assert!(!patched.text.contains("FALSE"));
    }

    #[test]
    fn test_missing_needles_are_reported() {
        let patched = patch_app_config("<?php\n$config['index_page'] = '';\n", &AppDescriptor::default());
        assert_eq!(patched.missing, vec![COMPOSER_AUTOLOAD, INDEX_PAGE]);
        assert_eq!(patched.text, "<?php\n$config['index_page'] = '';\n");
    }
}
