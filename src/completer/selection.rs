/// Commit policy of the widget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// A commit replaces the selection with the committed value, copies it
    /// into the query and closes the panel.
    #[default]
    Single,
    /// A commit toggles the value; query and panel are left alone.
    Multiple,
}

impl SelectionMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }
}

/// Selected values in first-insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    values: Vec<String>,
}

impl SelectionSet {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Adds `value` if absent, removes it otherwise.
    ///
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.remove(value) {
            false
        } else {
            self.values.push(value.to_string());
            true
        }
    }

    /// Removes `value`; returns whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        before != self.values.len()
    }

    pub fn replace(&mut self, value: &str) {
        self.values.clear();
        self.values.push(value.to_string());
    }

    pub fn pop_last(&mut self) -> Option<String> {
        self.values.pop()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.values
    }
}
