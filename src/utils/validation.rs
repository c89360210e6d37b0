use crate::utils::error::{SeedError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects paths that would point an app folder at the project root itself.
pub fn validate_not_project_root(field_name: &str, path: &str) -> Result<()> {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() || trimmed == "." || trimmed == "./" {
        return Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must name a folder below the project root".to_string(),
        });
    }
    Ok(())
}

/// App folders are written below the project root, so the path must stay there.
pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    let invalid = |reason: &str| SeedError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    };

    if path.starts_with('/') || path.starts_with('\\') || Path::new(path).is_absolute() {
        return Err(invalid("Path must be relative to the project root"));
    }
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(invalid("Path must not contain `..` segments"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Path segments with empty and `.` parts dropped.
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

/// Fails on the first value that appears twice, comparing normalized segments.
pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(segments(value)) {
            return Err(SeedError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Path is used by more than one app folder".to_string(),
            });
        }
    }
    Ok(())
}

/// Fails when one folder would sit inside another, e.g. `application` and `application/config`.
pub fn validate_disjoint<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let values: Vec<&str> = values.into_iter().collect();

    for (i, outer) in values.iter().enumerate() {
        let outer_segments = segments(outer);
        for (j, inner) in values.iter().enumerate() {
            let inner_segments = segments(inner);
            if i != j
                && inner_segments.len() > outer_segments.len()
                && inner_segments.starts_with(&outer_segments)
            {
                return Err(SeedError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: inner.to_string(),
                    reason: format!("Path is nested inside app folder `{}`", outer),
                });
            }
        }
    }
    Ok(())
}
