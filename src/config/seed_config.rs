use crate::domain::model::{default_apps, AppDescriptor, SeedLayout};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub apps: Vec<AppDescriptor>,
    #[serde(default)]
    pub layout: SeedLayout,
}

impl SeedConfig {
    /// Default layout with the single `application` / `public` app.
    pub fn with_defaults() -> Self {
        Self {
            apps: default_apps(),
            layout: SeedLayout::default(),
        }
    }

    /// Resolves the app list for a project.
    ///
    /// An explicit apps file wins. Otherwise the project's `composer.json` is
    /// read, and a project without one gets the defaults.
    pub fn load(project_root: &Path, apps_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = apps_file {
            tracing::debug!("Loading apps from {}", path.display());
            return Self::from_file(path);
        }

        let manifest = project_root.join(SeedLayout::default().manifest);
        if !manifest.is_file() {
            tracing::warn!(
                "{} not found, using the default app layout",
                manifest.display()
            );
            return Ok(Self::with_defaults());
        }

        tracing::debug!("Loading apps from {}", manifest.display());
        let content =
            std::fs::read_to_string(&manifest).map_err(|e| SeedError::fs(&manifest, e))?;
        Self::from_manifest_str(&content)
    }

    /// Reads `config.apps` from a Composer manifest, falling back to `extra.apps`.
    pub fn from_manifest_str(content: &str) -> Result<Self> {
        let manifest: serde_json::Value = serde_json::from_str(content)?;

        let apps_value = ["/config/apps", "/extra/apps"]
            .iter()
            .filter_map(|pointer| manifest.pointer(pointer))
            .find(|value| is_truthy(value));

        let apps = match apps_value {
            Some(value) => serde_json::from_value::<Vec<AppDescriptor>>(value.clone())?,
            None => Vec::new(),
        };

        Ok(Self {
            apps,
            layout: SeedLayout::default(),
        }
        .normalized())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SeedError::fs(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: SeedConfig = toml::from_str(&processed_content)?;
        Ok(config.normalized())
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeedError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn normalized(mut self) -> Self {
        if self.apps.is_empty() {
            self.apps = default_apps();
        }
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        for (i, app) in self.apps.iter().enumerate() {
            let source_field = format!("apps[{}].source", i);
            let doc_root_field = format!("apps[{}].doc_root", i);

            validation::validate_path(&source_field, &app.source)?;
            validation::validate_path(&doc_root_field, &app.doc_root)?;
            validation::validate_not_project_root(&source_field, &app.source)?;
            validation::validate_not_project_root(&doc_root_field, &app.doc_root)?;
            validation::validate_relative_path(&source_field, &app.source)?;
            validation::validate_relative_path(&doc_root_field, &app.doc_root)?;

            if app.source.trim_matches('/') == app.doc_root.trim_matches('/') {
                return Err(SeedError::InvalidConfigValueError {
                    field: doc_root_field,
                    value: app.doc_root.clone(),
                    reason: "doc_root must differ from source".to_string(),
                });
            }
        }

        let targets = || {
            self.apps
                .iter()
                .flat_map(|app| [app.source.as_str(), app.doc_root.as_str()])
        };
        validation::validate_unique("apps", targets())?;
        validation::validate_disjoint("apps", targets())?;

        validation::validate_path("layout.framework_dir", &self.layout.framework_dir)?;
        validation::validate_non_empty_string(
            "layout.composer_program",
            &self.layout.composer_program,
        )?;

        Ok(())
    }
}

// Mirrors how the dependency manager's config lookup treats "no value".
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

impl ConfigProvider for SeedConfig {
    fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    fn layout(&self) -> &SeedLayout {
        &self.layout
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
