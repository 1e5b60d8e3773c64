//! Headless autocomplete state machine.
//!
//! [`Autocompleter`] owns the query, the filtered suggestions, the active
//! index, the selection and the panel visibility. Every transition is a
//! synchronous `&mut self` method; nothing here knows about terminals.
mod error;
mod highlight;
mod navigation;
mod query;
mod selection;
mod visibility;

pub use error::NoCandidateError;
pub use highlight::{HighlightSpan, Highlights, highlight};
pub use navigation::Navigation;
pub use query::{FilterMode, QueryEngine, QueryMatcher};
pub use selection::{SelectionMode, SelectionSet};
pub use visibility::Visibility;

use tracing::{debug, info};

#[derive(Debug)]
pub struct Autocompleter {
    query: QueryEngine,
    navigation: Navigation,
    selection: SelectionSet,
    visibility: Visibility,
    mode: SelectionMode,
    focused: bool,
}

impl Autocompleter {
    pub fn new(candidates: Vec<String>, mode: SelectionMode) -> Self {
        Self {
            query: QueryEngine::new(candidates, FilterMode::default()),
            navigation: Navigation::default(),
            selection: SelectionSet::default(),
            visibility: Visibility::default(),
            mode,
            focused: false,
        }
    }

    pub fn with_filter_mode(self, filter_mode: FilterMode) -> Self {
        let candidates = self.query.candidates().to_vec();
        Self {
            query: QueryEngine::new(candidates, filter_mode),
            ..self
        }
    }

    pub fn candidates(&self) -> &[String] {
        self.query.candidates()
    }

    pub fn query(&self) -> &str {
        self.query.query()
    }

    /// The list currently rendered in the suggestion panel.
    pub fn displayed(&self) -> &[String] {
        self.query.filtered()
    }

    pub fn active_index(&self) -> usize {
        self.navigation.active()
    }

    pub fn active_candidate(&self) -> Option<&str> {
        self.displayed()
            .get(self.navigation.active())
            .map(String::as_str)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.query.matcher().mode()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Whether the input has been asked to take focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Spans of `candidate` matched by the current query.
    pub fn highlight<'a>(&self, candidate: &'a str) -> Highlights<'a> {
        self.query.matcher().highlight(candidate)
    }

    pub fn on_query_change(&mut self, text: &str) {
        self.query.set_query(text);
        self.navigation.reset();
        self.open();
        debug!(
            query = text,
            matches = self.displayed().len(),
            "query changed"
        );
    }

    pub fn on_arrow_down(&mut self) {
        self.navigation.next(self.displayed().len());
    }

    pub fn on_arrow_up(&mut self) {
        self.navigation.previous(self.displayed().len());
    }

    /// Commits the active entry of the displayed list.
    pub fn on_commit(&mut self) -> Result<String, NoCandidateError> {
        let value = self
            .active_candidate()
            .map(str::to_string)
            .ok_or(NoCandidateError)?;

        match self.mode {
            SelectionMode::Single => {
                self.selection.replace(&value);
                self.query.set_query(&value);
                self.navigation.reset();
                self.close();
            }
            SelectionMode::Multiple => {
                self.selection.toggle(&value);
            }
        }

        info!(
            value = value.as_str(),
            selected = self.selection.len(),
            "committed"
        );
        Ok(value)
    }

    /// Activates the entry at `index` of the displayed list and commits it.
    pub fn on_candidate_click(
        &mut self,
        index: usize,
    ) -> Result<String, NoCandidateError> {
        if !self.navigation.select(index, self.displayed().len()) {
            return Err(NoCandidateError);
        }

        self.on_commit()
    }

    /// Toggles `value` in the selection. Values outside the candidate list
    /// are ignored and `false` is returned.
    pub fn toggle(&mut self, value: &str) -> bool {
        if !self.query.is_candidate(value) {
            return false;
        }

        self.selection.toggle(value)
    }

    pub fn remove(&mut self, value: &str) {
        if self.selection.remove(value) {
            debug!(value, "removed from selection");
        }
    }

    pub fn remove_last(&mut self) -> Option<String> {
        self.selection.pop_last()
    }

    pub fn open(&mut self) {
        self.visibility.open();
        self.focused = true;
    }

    pub fn close(&mut self) {
        self.visibility.close();
        self.focused = false;
    }

    /// Header activation: flips the panel open or closed.
    pub fn toggle_open(&mut self) {
        self.visibility.toggle();
        self.focused = self.visibility.is_open();
    }

    pub fn on_escape(&mut self) {
        self.close();
    }

    pub fn on_outside_interaction(&mut self) {
        self.close();
    }

    pub fn into_selection(self) -> Vec<String> {
        self.selection.into_vec()
    }
}
