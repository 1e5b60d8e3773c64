/// Whether the suggestion panel is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    pub fn open(&mut self) {
        *self = Visibility::Open;
    }

    pub fn close(&mut self) {
        *self = Visibility::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Visibility::Open => Visibility::Closed,
            Visibility::Closed => Visibility::Open,
        };
    }
}
