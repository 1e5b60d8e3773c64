use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::completer::Autocompleter;
use crate::widget::{hit_map::HitMap, props::WidgetProps, ui_flags::UiFlags};

const INPUT_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    Normal,
    HelpPopup,
}

pub struct WidgetState<'a> {
    pub completer: Autocompleter,
    pub input: TextArea<'a>,
    pub label: String,
    pub title: String,

    pub mode: WidgetMode,
    pub ui_flags: UiFlags,
    pub hit_map: HitMap,

    pub should_exit: bool,
}

impl<'a> WidgetState<'a> {
    pub fn new(props: WidgetProps) -> Self {
        let completer = Autocompleter::new(props.candidates, props.selection_mode)
            .with_filter_mode(props.filter_mode);

        Self {
            completer,
            input: new_input(""),
            label: props.label,
            title: props.title,
            mode: WidgetMode::Normal,
            ui_flags: UiFlags::new(props.alternate_background),
            hit_map: HitMap::default(),
            should_exit: false,
        }
    }

    pub fn input_text(&self) -> String {
        self.input.lines().join("\n")
    }

    /// Applies `operation` to the input and feeds the result to the
    /// completer as a query change.
    pub fn handle_textarea_input<F>(&mut self, operation: F)
    where
        F: FnOnce(&mut TextArea),
    {
        operation(&mut self.input);

        let text = self.input_text();
        self.completer.on_query_change(&text);
    }

    /// Rebuilds the input when the completer rewrote the query (e.g. on a
    /// single-select commit).
    pub fn sync_input(&mut self) {
        if self.input_text() != self.completer.query() {
            self.input = new_input(self.completer.query());
        }

        let cursor_style = if self.completer.is_focused() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.input.set_cursor_style(cursor_style);
    }
}

fn new_input<'a>(text: &str) -> TextArea<'a> {
    let mut input = TextArea::new(vec![text.to_string()]);
    input.set_cursor_line_style(Style::default());
    input.set_placeholder_text(INPUT_PLACEHOLDER);
    input.move_cursor(CursorMove::End);
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(items: &[&str]) -> WidgetState<'static> {
        WidgetState::new(WidgetProps::new(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn textarea_edits_drive_query() {
        let mut state = state(&["Apple", "Banana"]);
        state.handle_textarea_input(|input| input.insert_char('p'));
        assert_eq!(state.completer.query(), "p");
        assert_eq!(state.completer.displayed(), ["Apple"]);
        assert!(state.completer.is_open());
    }

    #[test]
    fn sync_input_follows_committed_query() {
        let mut state = state(&["Apple", "Banana"]);
        state.handle_textarea_input(|input| input.insert_char('b'));
        state.completer.on_commit().unwrap();
        state.sync_input();
        assert_eq!(state.input_text(), "Banana");
    }
}
