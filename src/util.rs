use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Error type returned when a story name is invalid.
#[derive(Debug)]
pub struct StoryNameError(String);

impl std::error::Error for StoryNameError {}

impl fmt::Display for StoryNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a story name according to the rules:
///
/// - Must be between 1 and 30 characters long.
/// - Can only contain alphanumeric characters, underscores (`_`),
///   and hyphens (`-`).
///
/// # Errors
///
/// Returns a [`StoryNameError`] if the name is invalid.
///
/// # Examples
/// ```
/// # use autocompleter::validate_story_name;
/// assert!(validate_story_name("valid_name-123").is_ok());
/// assert!(validate_story_name("invalid name").is_err());
/// ```
pub fn validate_story_name(name: &str) -> Result<String, StoryNameError> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !valid_chars || name.is_empty() || name.len() > 30 {
        Err(StoryNameError(
            "Story name must be 1-30 characters long and only contain [a-zA-Z0-9_-]"
                .into(),
        ))
    } else {
        Ok(name.to_string())
    }
}

/// Reads candidates from a YAML sequence (`.yaml`/`.yml`) or from a plain
/// text file with one candidate per non-empty line.
pub fn read_candidates(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

    if is_yaml {
        return serde_yaml::from_str(&data).with_context(|| {
            format!("Expected a list of strings in {}", path.display())
        });
    }

    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
