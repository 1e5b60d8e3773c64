use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

use crate::widget::{
    action::WidgetAction,
    hit_map::HitTarget,
    state::{WidgetMode, WidgetState},
};

pub trait EventHandler {
    fn handle_event(&self, event: Event, state: &WidgetState) -> WidgetAction;
}

pub struct DefaultEventHandler;

impl EventHandler for DefaultEventHandler {
    fn handle_event(&self, event: Event, state: &WidgetState) -> WidgetAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match state.mode {
                    WidgetMode::HelpPopup => handle_help_popup_key(key),
                    WidgetMode::Normal => handle_normal_mode_key(key, state),
                }
            }
            Event::Mouse(mouse) if state.mode == WidgetMode::Normal => {
                handle_mouse(mouse, state)
            }
            _ => WidgetAction::Nop,
        }
    }
}

fn handle_help_popup_key(key: KeyEvent) -> WidgetAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('h')) => WidgetAction::ToggleHelp,
        (true, KeyCode::Char('c')) => WidgetAction::Exit,
        (false, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) => {
            WidgetAction::ToggleHelp
        }
        _ => WidgetAction::Nop,
    }
}

fn handle_normal_mode_key(key: KeyEvent, state: &WidgetState) -> WidgetAction {
    let is_open = state.completer.is_open();

    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('p')) => WidgetAction::SelectPrevious,
        (true, KeyCode::Char('n')) => WidgetAction::SelectNext,
        (true, KeyCode::Char('w')) => WidgetAction::RemoveLastWord,
        (true, KeyCode::Char('h')) => WidgetAction::ToggleHelp,
        (true, KeyCode::Char('c')) => WidgetAction::Exit,

        (false, KeyCode::Char(c)) => WidgetAction::AppendToInput(c),
        (false, KeyCode::Backspace) if state.completer.query().is_empty() => {
            WidgetAction::RemoveLastChip
        }
        (false, KeyCode::Backspace) => WidgetAction::DeleteFromInput,
        (false, KeyCode::Up) => WidgetAction::SelectPrevious,
        (false, KeyCode::Down) => WidgetAction::SelectNext,
        (false, KeyCode::Tab) => WidgetAction::ToggleOpen,
        (false, KeyCode::Enter) if is_open => WidgetAction::Commit,
        (false, KeyCode::Enter) => WidgetAction::Open,
        (false, KeyCode::Esc) if is_open => WidgetAction::Close,
        (false, KeyCode::Esc) => WidgetAction::Exit,

        _ => WidgetAction::Nop,
    }
}

/// Maps pointer-downs inside the widget. Pointer-downs outside it reach the
/// completer through the pointer hub instead.
fn handle_mouse(mouse: MouseEvent, state: &WidgetState) -> WidgetAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return WidgetAction::Nop;
    }

    match state.hit_map.hit(mouse.column, mouse.row) {
        HitTarget::ChipDismiss(value) => WidgetAction::RemoveChip(value),
        HitTarget::Header => WidgetAction::ToggleOpen,
        HitTarget::Input => WidgetAction::Open,
        HitTarget::Suggestion(index) => WidgetAction::ClickSuggestion(index),
        HitTarget::Inside | HitTarget::Outside => WidgetAction::Nop,
    }
}
