//! Named demo configurations of the widget.
use crate::config::Config;
use crate::completer::SelectionMode;
use crate::widget::props::WidgetProps;

const STORY_TITLE_PREFIX: &str = "Components/Autocompleter";

struct BuiltinStory {
    name: &'static str,
    candidates: &'static [&'static str],
    multiple_selection: bool,
}

const BUILTIN_STORIES: &[BuiltinStory] = &[
    BuiltinStory {
        name: "default",
        candidates: &[
            "Option 1",
            "Long Option2",
            "Loong Option3",
            "Looong Option4",
            "Loooong Option5",
            "Looooong Option6",
            "Looooooong Option7",
        ],
        multiple_selection: false,
    },
    BuiltinStory {
        name: "fruits",
        candidates: &["Apple", "Banana", "Avocado"],
        multiple_selection: false,
    },
    BuiltinStory {
        name: "tags",
        candidates: &["bug", "feature", "docs", "help wanted", "wontfix"],
        multiple_selection: true,
    },
    BuiltinStory {
        name: "languages",
        candidates: &["C", "C++", "C#", "F#", ".NET", "Rust", "Objective-C"],
        multiple_selection: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorySource {
    Builtin,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySummary {
    pub name: String,
    pub candidates: usize,
    pub source: StorySource,
}

/// Resolves a story by name. Stories from the config shadow built-ins.
pub fn resolve(name: &str, config: &Config) -> Option<WidgetProps> {
    let mut props = if let Some(story) = config.stories.get(name) {
        let mut props = config.props_for(story.candidates.clone());
        if let Some(label) = &story.label {
            props.label = label.clone();
        }
        if let Some(alternate) = story.alternate_background {
            props.alternate_background = alternate;
        }
        if let Some(multiple) = story.multiple_selection {
            props.selection_mode = SelectionMode::from_multiple(multiple);
        }
        props
    } else {
        let story = BUILTIN_STORIES.iter().find(|s| s.name == name)?;
        let candidates =
            story.candidates.iter().map(|s| s.to_string()).collect();
        let mut props = config.props_for(candidates);
        if story.multiple_selection {
            props.selection_mode = SelectionMode::Multiple;
        }
        props
    };

    props.title = story_title(name);
    Some(props)
}

pub fn story_title(name: &str) -> String {
    format!("{STORY_TITLE_PREFIX} · {name}")
}

/// All resolvable stories, sorted by name.
pub fn list(config: &Config) -> Vec<StorySummary> {
    let mut stories: Vec<StorySummary> = BUILTIN_STORIES
        .iter()
        .filter(|s| !config.stories.contains_key(s.name))
        .map(|s| StorySummary {
            name: s.name.to_string(),
            candidates: s.candidates.len(),
            source: StorySource::Builtin,
        })
        .collect();

    stories.extend(config.stories.iter().map(|(name, story)| StorySummary {
        name: name.clone(),
        candidates: story.candidates.len(),
        source: StorySource::Config,
    }));

    stories.sort_by(|a, b| a.name.cmp(&b.name));
    stories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoryConfig;

    #[test]
    fn default_story_has_seven_options() {
        let props = resolve("default", &Config::default()).unwrap();
        assert_eq!(props.candidates.len(), 7);
        assert_eq!(props.candidates[0], "Option 1");
        assert_eq!(props.selection_mode, SelectionMode::Single);
        assert_eq!(props.title, "Components/Autocompleter · default");
    }

    #[test]
    fn tags_story_is_multi_select() {
        let props = resolve("tags", &Config::default()).unwrap();
        assert_eq!(props.selection_mode, SelectionMode::Multiple);
    }

    #[test]
    fn unknown_story_is_none() {
        assert!(resolve("nope", &Config::default()).is_none());
    }

    #[test]
    fn config_story_shadows_builtin() {
        let mut config = Config::default();
        config.stories.insert(
            "fruits".into(),
            StoryConfig {
                candidates: vec!["Kiwi".into()],
                label: Some("Fruit".into()),
                alternate_background: Some(true),
                multiple_selection: Some(true),
            },
        );

        let props = resolve("fruits", &config).unwrap();
        assert_eq!(props.candidates, ["Kiwi"]);
        assert_eq!(props.label, "Fruit");
        assert!(props.alternate_background);
        assert_eq!(props.selection_mode, SelectionMode::Multiple);

        let listed = list(&config);
        let fruits: Vec<_> =
            listed.iter().filter(|s| s.name == "fruits").collect();
        assert_eq!(fruits.len(), 1);
        assert_eq!(fruits[0].source, StorySource::Config);
        assert_eq!(listed.len(), BUILTIN_STORIES.len());
    }
}
