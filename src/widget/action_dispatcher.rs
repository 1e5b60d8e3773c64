use anyhow::Result;
use tracing::debug;

use crate::completer::NoCandidateError;
use crate::widget::{
    action::WidgetAction,
    state::{WidgetMode, WidgetState},
};

pub trait ActionDispatcher {
    fn dispatch(&self, action: WidgetAction, state: &mut WidgetState)
    -> Result<()>;
}

pub struct DefaultActionDispatcher;

impl ActionDispatcher for DefaultActionDispatcher {
    fn dispatch(
        &self,
        action: WidgetAction,
        state: &mut WidgetState,
    ) -> Result<()> {
        match action {
            WidgetAction::AppendToInput(c) => {
                state.handle_textarea_input(|input| input.insert_char(c));
            }
            WidgetAction::DeleteFromInput => {
                state.handle_textarea_input(|input| {
                    input.delete_char();
                });
            }
            WidgetAction::RemoveLastWord => {
                state.handle_textarea_input(|input| {
                    input.delete_word();
                });
            }
            WidgetAction::SelectPrevious => state.completer.on_arrow_up(),
            WidgetAction::SelectNext => state.completer.on_arrow_down(),
            WidgetAction::Commit => {
                let result = state.completer.on_commit();
                ignore_missing_candidate(result);
            }
            WidgetAction::ClickSuggestion(index) => {
                let result = state.completer.on_candidate_click(index);
                ignore_missing_candidate(result);
            }
            WidgetAction::RemoveChip(value) => state.completer.remove(&value),
            WidgetAction::RemoveLastChip => {
                state.completer.remove_last();
            }
            WidgetAction::Open => state.completer.open(),
            WidgetAction::ToggleOpen => state.completer.toggle_open(),
            WidgetAction::Close => state.completer.on_escape(),
            WidgetAction::OutsideInteraction => {
                state.completer.on_outside_interaction()
            }
            WidgetAction::ToggleHelp => {
                state.mode = match state.mode {
                    WidgetMode::Normal => WidgetMode::HelpPopup,
                    WidgetMode::HelpPopup => WidgetMode::Normal,
                };
                state.ui_flags.show_help = state.mode == WidgetMode::HelpPopup;
            }
            WidgetAction::Exit => state.should_exit = true,
            WidgetAction::Nop => return Ok(()),
        }

        state.sync_input();
        Ok(())
    }
}

fn ignore_missing_candidate(result: Result<String, NoCandidateError>) {
    if let Err(err) = result {
        debug!(%err, "commit ignored");
    }
}
