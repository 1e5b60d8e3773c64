use std::{cell::Cell, rc::Rc};

use ratatui::layout::{Position, Rect};

/// Dismiss button of one rendered chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRegion {
    pub value: String,
    pub dismiss: Rect,
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    ChipDismiss(String),
    Header,
    Input,
    Suggestion(usize),
    Inside,
    Outside,
}

/// Screen regions recorded by the renderer on the last frame.
#[derive(Debug, Default)]
pub struct HitMap {
    /// Whole widget area; shared with the pointer hub.
    pub bounds: Rc<Cell<Rect>>,
    pub header: Rect,
    pub chips: Vec<ChipRegion>,
    pub input: Rect,
    pub list: Rect,
    pub list_offset: usize,
}

impl HitMap {
    pub fn set_bounds(&self, area: Rect) {
        self.bounds.set(area);
    }

    pub fn clear_panel(&mut self) {
        self.input = Rect::default();
        self.list = Rect::default();
        self.list_offset = 0;
    }

    pub fn hit(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);

        if !self.bounds.get().contains(position) {
            return HitTarget::Outside;
        }

        if let Some(chip) =
            self.chips.iter().find(|c| c.dismiss.contains(position))
        {
            return HitTarget::ChipDismiss(chip.value.clone());
        }

        if self.header.contains(position) {
            return HitTarget::Header;
        }

        if self.input.contains(position) {
            return HitTarget::Input;
        }

        if self.list.contains(position) {
            let row = usize::from(row - self.list.y);
            return HitTarget::Suggestion(self.list_offset + row);
        }

        HitTarget::Inside
    }
}
