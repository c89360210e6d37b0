use crate::domain::model::AppDescriptor;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardReport {
    /// Target paths that already exist, in the order they were checked.
    pub conflicts: Vec<String>,
}

impl GuardReport {
    pub fn is_safe(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.conflicts
            .iter()
            .map(|path| format!("Folder {} is already exist.", path))
            .collect()
    }
}

/// Checks every app's `source` then `doc_root` under `project_root`.
pub fn check_targets(project_root: &Path, apps: &[AppDescriptor]) -> GuardReport {
    let mut report = GuardReport::default();

    for app in apps {
        for target in [&app.source, &app.doc_root] {
            let path = project_root.join(target.trim_end_matches('/'));
            if path.exists() {
                tracing::debug!("Target {} already exists", path.display());
                report.conflicts.push(target.clone());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_root_is_safe() {
        let dir = TempDir::new().unwrap();
        let report = check_targets(dir.path(), &[AppDescriptor::default()]);
        assert!(report.is_safe());
    }

    #[test]
    fn test_every_existing_target_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("application")).unwrap();
        std::fs::create_dir_all(dir.path().join("web/admin")).unwrap();

        let apps = vec![
            AppDescriptor::new("application", "public"),
            AppDescriptor::new("admin", "web/admin"),
        ];
        let report = check_targets(dir.path(), &apps);

        assert!(!report.is_safe());
        assert_eq!(report.conflicts, vec!["application", "web/admin"]);
        assert_eq!(
            report.diagnostics(),
            vec![
                "Folder application is already exist.",
                "Folder web/admin is already exist."
            ]
        );
    }

    #[test]
    fn test_existing_file_counts_as_conflict() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("public"), "not a folder").unwrap();

        let report = check_targets(dir.path(), &[AppDescriptor::default()]);
        assert_eq!(report.conflicts, vec!["public"]);
    }

    #[test]
    fn test_parent_folder_alone_is_not_a_conflict() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("web")).unwrap();

        let report = check_targets(dir.path(), &[AppDescriptor::new("app", "web/public")]);
        assert!(report.is_safe());
    }
}
