// Selection state - keyboard cursor within the current panel
use crate::state::Level;
use std::collections::HashMap;

pub struct SelectionState {
    pub selected_index: Option<usize>,
    pub level_selections: HashMap<Level, usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
            level_selections: HashMap::new(),
        }
    }

    /// Remember the cursor for `level` before drilling down.
    pub fn save_selection(&mut self, level: Level) {
        if let Some(idx) = self.selected_index {
            self.level_selections.insert(level, idx);
        }
    }

    /// Restore the cursor saved for `level`, clamped to `len` items.
    pub fn restore_selection(&mut self, level: Level, len: usize) {
        self.selected_index = self
            .level_selections
            .remove(&level)
            .filter(|_| len > 0)
            .map(|idx| idx.min(len - 1))
            .or(if len > 0 { Some(0) } else { None });
    }

    pub fn reset(&mut self, len: usize) {
        self.selected_index = if len > 0 { Some(0) } else { None };
    }

    pub fn move_delta(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        let current = self.selected_index.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selected_index = Some(next as usize);
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_delta_clamps() {
        let mut sel = SelectionState::new();
        sel.move_delta(1, 3);
        assert_eq!(sel.selected_index, Some(1));
        sel.move_delta(5, 3);
        assert_eq!(sel.selected_index, Some(2));
        sel.move_delta(-10, 3);
        assert_eq!(sel.selected_index, Some(0));
        sel.move_delta(1, 0);
        assert_eq!(sel.selected_index, None);
    }

    #[test]
    fn test_save_and_restore() {
        let mut sel = SelectionState::new();
        sel.selected_index = Some(2);
        sel.save_selection(Level::TermSelect);
        sel.reset(4);
        assert_eq!(sel.selected_index, Some(0));

        sel.restore_selection(Level::TermSelect, 4);
        assert_eq!(sel.selected_index, Some(2));

        // Nothing saved any more, falls back to the first row
        sel.restore_selection(Level::TermSelect, 4);
        assert_eq!(sel.selected_index, Some(0));

        sel.selected_index = Some(5);
        sel.save_selection(Level::OptionSelect);
        sel.restore_selection(Level::OptionSelect, 2);
        assert_eq!(sel.selected_index, Some(1));
    }
}
