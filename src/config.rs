//! Optional TOML configuration.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::completer::{FilterMode, SelectionMode};
use crate::widget::props::{DEFAULT_LABEL, WidgetProps};

const CONFIG_ENV_VAR: &str = "AUTOCOMPLETER_CONFIG";
const CONFIG_DIR: &str = "autocompleter";
const CONFIG_FILE: &str = "config.toml";

/// Defaults applied to every widget, plus user-defined stories.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub label: Option<String>,
    pub alternate_background: bool,
    pub multiple_selection: bool,
    pub filter_mode: FilterMode,
    pub stories: BTreeMap<String, StoryConfig>,
}

/// A story declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryConfig {
    pub candidates: Vec<String>,
    pub label: Option<String>,
    pub alternate_background: Option<bool>,
    pub multiple_selection: Option<bool>,
}

impl Config {
    /// Widget props for `candidates` with this config's defaults applied.
    pub fn props_for(&self, candidates: Vec<String>) -> WidgetProps {
        WidgetProps {
            label: self
                .label
                .clone()
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            alternate_background: self.alternate_background,
            selection_mode: SelectionMode::from_multiple(
                self.multiple_selection,
            ),
            filter_mode: self.filter_mode,
            ..WidgetProps::new(candidates)
        }
    }
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load() -> Result<Config> {
    let path = get_config_file_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&data)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse(data: &str) -> Result<Config> {
    Ok(toml::from_str(data)?)
}

pub fn get_config_file_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!("Failed to determine config directory")
    })?;
    Ok(dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn parses_defaults_and_stories() {
        let config = parse(
            r#"
            label = "Fruit"
            multiple_selection = true
            filter_mode = "fuzzy"

            [stories.snacks]
            candidates = ["Chips", "Nuts"]
            alternate_background = true
            "#,
        )
        .unwrap();

        assert_eq!(config.label.as_deref(), Some("Fruit"));
        assert!(config.multiple_selection);
        assert_eq!(config.filter_mode, FilterMode::Fuzzy);

        let story = &config.stories["snacks"];
        assert_eq!(story.candidates, ["Chips", "Nuts"]);
        assert_eq!(story.alternate_background, Some(true));
        assert_eq!(story.multiple_selection, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse("colour = \"red\"").is_err());
        assert!(parse("filter_mode = \"regex\"").is_err());
    }

    #[test]
    fn props_carry_config_defaults() {
        let config = Config {
            multiple_selection: true,
            alternate_background: true,
            ..Config::default()
        };
        let props = config.props_for(vec!["a".into()]);
        assert_eq!(props.label, DEFAULT_LABEL);
        assert_eq!(props.selection_mode, SelectionMode::Multiple);
        assert!(props.alternate_background);
    }

    #[test]
    fn load_from_reports_path_on_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label = ").unwrap();

        let err = load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
