//! Pointer-down-outside-bounds notifications.
//!
//! A [`PointerHub`] is fed every pointer-down the host receives. Components
//! register a bounds region and a callback; the callback runs for each
//! pointer-down that lands outside the region. Registration returns a
//! [`PointerSubscription`] that unregisters itself when dropped.
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use ratatui::layout::{Position, Rect};
use tracing::trace;

type Callback = Rc<RefCell<dyn FnMut()>>;

struct Listener {
    id: u64,
    bounds: Rc<Cell<Rect>>,
    callback: Callback,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

#[derive(Default, Clone)]
pub struct PointerHub {
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` to run on pointer-downs outside `bounds`.
    ///
    /// `bounds` is shared so the owner can move it on every frame.
    pub fn register<F>(
        &self,
        bounds: Rc<Cell<Rect>>,
        callback: F,
    ) -> PointerSubscription
    where
        F: FnMut() + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push(Listener {
            id,
            bounds,
            callback: Rc::new(RefCell::new(callback)),
        });

        trace!(id, "pointer listener registered");
        PointerSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Notifies every listener whose bounds do not contain the point.
    pub fn pointer_down(&self, column: u16, row: u16) {
        let position = Position::new(column, row);

        // callbacks may drop subscriptions, so release the borrow first
        let outside: Vec<Callback> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .filter(|l| !l.bounds.get().contains(position))
            .map(|l| Rc::clone(&l.callback))
            .collect();

        for callback in outside {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)();
            }
        }
    }
}

/// Live registration with a [`PointerHub`]; unregisters on drop.
pub struct PointerSubscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };

        if let Ok(mut listeners) = listeners.try_borrow_mut() {
            listeners.entries.retain(|l| l.id != self.id);
            trace!(id = self.id, "pointer listener released");
        }
    }
}
