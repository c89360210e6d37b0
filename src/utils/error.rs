use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("File system error at {}: {source}", .path.display())]
    FileSystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Manifest parsing error: {0}")]
    ManifestError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template not found: {}", .path.display())]
    MissingTemplateError { path: PathBuf },

    #[error("Dependency update failed: {message}")]
    UpdateError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Template,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SeedError {
    /// Wraps an I/O error with the path it happened on.
    pub fn fs(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SeedError::FileSystemError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SeedError::FileSystemError { .. } | SeedError::WalkError(_) => ErrorCategory::FileSystem,
            SeedError::ManifestError(_)
            | SeedError::TomlError(_)
            | SeedError::ConfigError { .. }
            | SeedError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SeedError::MissingTemplateError { .. } => ErrorCategory::Template,
            SeedError::UpdateError { .. } => ErrorCategory::External,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::External => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Template => ErrorSeverity::High,
            // a half-written scaffold needs manual attention
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SeedError::FileSystemError { path, .. } => format!(
                "Check permissions for {} and remove any partially created app folders before retrying",
                path.display()
            ),
            SeedError::WalkError(_) => {
                "Check that the project directory is readable and writable".to_string()
            }
            SeedError::ManifestError(_) => "Make sure composer.json is valid JSON".to_string(),
            SeedError::TomlError(_) => "Make sure the apps file is valid TOML".to_string(),
            SeedError::ConfigError { .. } => "Review the apps configuration".to_string(),
            SeedError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of `{}` in the apps configuration", field)
            }
            SeedError::MissingTemplateError { .. } => {
                "Run `composer install` so the framework package is present under vendor/".to_string()
            }
            SeedError::UpdateError { .. } => {
                "Run `composer update` manually once the scaffold is in place".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::FileSystem => format!("Could not write the scaffold: {}", self),
            ErrorCategory::Template => format!("Framework files are missing: {}", self),
            ErrorCategory::External => format!("External command failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_names_path() {
        let err = SeedError::fs(
            "public/index.php",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("public/index.php"));
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_config_error_severity() {
        let err = SeedError::InvalidConfigValueError {
            field: "apps[0].source".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("apps[0].source"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
