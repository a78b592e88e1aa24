//! Row selection for the item list.

/// Single-row selection that survives list mutations.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Creates a selection with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected row index, if any.
    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move to the next row, stopping at the last one.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move to the previous row, stopping at the first one.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Selects the first row. No-op on an empty list.
    pub fn jump_to_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    /// Selects the last row. No-op on an empty list.
    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Checks whether `index` is the selected row.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Keep the selection inside `0..len` after rows were removed.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected_index {
            if len == 0 {
                self.selected_index = None;
            } else if idx >= len {
                self.selected_index = Some(len - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_stay_in_bounds() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
        selection.prev(2);
        selection.prev(2);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_movement_on_empty_list_selects_nothing() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        selection.jump_to_first(0);
        selection.jump_to_last(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut selection = SelectionState::new();
        selection.jump_to_last(5);

        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));

        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));

        selection.clamp(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_jump_to_last() {
        let mut selection = SelectionState::new();
        selection.jump_to_last(5);
        assert!(selection.is_selected(4));
        selection.jump_to_first(5);
        assert!(selection.is_selected(0));
    }
}
