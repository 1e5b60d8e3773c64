//! Terminal host for the [`Autocompleter`](crate::completer::Autocompleter).
pub mod action;
pub mod action_dispatcher;
pub mod event_handler;
pub mod hit_map;
pub mod props;
pub mod renderer;
pub mod state;
pub mod ui_flags;

use std::{cell::RefCell, collections::VecDeque, rc::Rc, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, MouseEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::pointer::{PointerHub, PointerSubscription};
use crate::widget::{
    action::WidgetAction,
    action_dispatcher::{ActionDispatcher, DefaultActionDispatcher},
    event_handler::{DefaultEventHandler, EventHandler},
    props::WidgetProps,
    renderer::{DefaultWidgetRenderer, WidgetRenderer},
    state::{WidgetMode, WidgetState},
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One mounted autocomplete widget.
///
/// Mounting registers an outside-click listener with the pointer hub; the
/// registration is released when the widget is dropped or unmounted.
pub struct AutocompleteWidget<'a> {
    state: WidgetState<'a>,

    event_handler: Box<dyn EventHandler>,
    action_dispatcher: Box<dyn ActionDispatcher>,
    renderer: Box<dyn WidgetRenderer>,

    pointer: PointerHub,
    pending: Rc<RefCell<VecDeque<WidgetAction>>>,
    _outside_click: PointerSubscription,
}

impl<'a> AutocompleteWidget<'a> {
    pub fn mount(props: WidgetProps, pointer: &PointerHub) -> Self {
        let state = WidgetState::new(props);
        let pending = Rc::new(RefCell::new(VecDeque::new()));

        let queue = Rc::downgrade(&pending);
        let outside_click = pointer.register(
            Rc::clone(&state.hit_map.bounds),
            move || {
                if let Some(queue) = queue.upgrade() {
                    queue
                        .borrow_mut()
                        .push_back(WidgetAction::OutsideInteraction);
                }
            },
        );

        info!(
            candidates = state.completer.candidates().len(),
            mode = ?state.completer.mode(),
            "widget mounted"
        );

        Self {
            state,
            event_handler: Box::new(DefaultEventHandler),
            action_dispatcher: Box::new(DefaultActionDispatcher),
            renderer: Box::new(DefaultWidgetRenderer::default()),
            pointer: pointer.clone(),
            pending,
            _outside_click: outside_click,
        }
    }

    pub fn state(&self) -> &WidgetState<'a> {
        &self.state
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.renderer.draw(frame, &mut self.state);
    }

    /// Routes one terminal event through the pointer hub and the widget's
    /// own handler, then applies every resulting action in order.
    ///
    /// Pointer-downs are kept from the hub while the help popup is shown.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Mouse(mouse) = &event
            && matches!(mouse.kind, MouseEventKind::Down(_))
            && self.state.mode == WidgetMode::Normal
        {
            self.pointer.pointer_down(mouse.column, mouse.row);
        }

        let action = self.event_handler.handle_event(event, &self.state);
        self.pending.borrow_mut().push_back(action);

        self.drain_actions()
    }

    fn drain_actions(&mut self) -> Result<()> {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(action) = next else {
                return Ok(());
            };

            if action != WidgetAction::Nop {
                debug!(?action, "dispatching");
            }
            self.action_dispatcher.dispatch(action, &mut self.state)?;
        }
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<Vec<String>> {
        while !self.should_exit() {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_INTERVAL)? {
                self.handle_event(event::read()?)?;
            }
        }

        Ok(self.unmount())
    }

    /// Drops the widget and returns the final selection.
    pub fn unmount(self) -> Vec<String> {
        let selection = self.state.completer.into_selection();
        info!(selected = selection.len(), "widget unmounted");
        selection
    }
}
