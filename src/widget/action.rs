#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    AppendToInput(char),
    DeleteFromInput,
    RemoveLastWord,
    SelectPrevious,
    SelectNext,
    Commit,
    ClickSuggestion(usize),
    RemoveChip(String),
    RemoveLastChip,
    Open,
    ToggleOpen,
    Close,
    OutsideInteraction,
    ToggleHelp,
    Exit,
    Nop,
}
