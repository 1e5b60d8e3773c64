/// Keyboard-highlighted position inside the displayed list.
///
/// The index wraps around at both ends. With an empty list every movement
/// is a no-op and the index stays at 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    active: usize,
}

impl Navigation {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    pub fn next(&mut self, len: usize) {
        self.move_by(1, len);
    }

    pub fn previous(&mut self, len: usize) {
        self.move_by(-1, len);
    }

    pub fn move_by(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.active = 0;
            return;
        }

        let len = len as i64;
        self.active = (self.active as i64 + i64::from(delta)).rem_euclid(len) as usize;
    }

    /// Moves to `index` if it lies inside a list of `len` entries.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }

        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let mut nav = Navigation::default();
        nav.previous(3);
        assert_eq!(nav.active(), 2);
        nav.next(3);
        assert_eq!(nav.active(), 0);
        nav.move_by(7, 3);
        assert_eq!(nav.active(), 1);
        nav.move_by(-5, 3);
        assert_eq!(nav.active(), 2);
    }

    #[test]
    fn empty_list_is_noop() {
        let mut nav = Navigation::default();
        nav.next(0);
        nav.previous(0);
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut nav = Navigation::default();
        assert!(nav.select(1, 2));
        assert!(!nav.select(2, 2));
        assert_eq!(nav.active(), 1);
    }
}
