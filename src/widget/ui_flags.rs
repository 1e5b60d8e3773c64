pub struct UiFlags {
    pub alternate_background: bool,
    pub show_help: bool,
}

impl UiFlags {
    pub fn new(alternate_background: bool) -> Self {
        Self {
            alternate_background,
            show_help: false,
        }
    }
}
