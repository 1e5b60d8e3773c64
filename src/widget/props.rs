use crate::completer::{FilterMode, SelectionMode};

pub const DEFAULT_LABEL: &str = "Label";

/// Construction-time configuration of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetProps {
    /// The fixed suggestion universe.
    pub candidates: Vec<String>,
    /// Text shown in the label column.
    pub label: String,
    /// Heading drawn above the widget by the demo host.
    pub title: String,
    /// Draw the header on the alternate (brown) background.
    pub alternate_background: bool,
    pub selection_mode: SelectionMode,
    pub filter_mode: FilterMode,
}

impl WidgetProps {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            label: DEFAULT_LABEL.to_string(),
            title: String::new(),
            alternate_background: false,
            selection_mode: SelectionMode::default(),
            filter_mode: FilterMode::default(),
        }
    }
}
