//! Row state read by cells

use super::arena::GridId;

/// A materialized row of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    /// Grid the row belongs to (assigned by the arena)
    pub grid: Option<GridId>,
    /// Index of the data item shown by the row
    pub index: Option<usize>,
    /// Display position accounting for collapsed rows; `None` while unassigned
    pub slot: Option<usize>,
    pub is_selected: bool,
    pub is_visible: bool,
    /// Column index of the cell under the pointer (one per row)
    mouse_over_column: Option<usize>,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            grid: None,
            index: None,
            slot: None,
            is_selected: false,
            is_visible: true,
            mouse_over_column: None,
        }
    }
}

impl RowState {
    /// Create a visible row at the given data index and slot
    pub fn new(index: usize, slot: usize) -> Self {
        Self {
            index: Some(index),
            slot: Some(slot),
            ..Self::default()
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Row whose slot has not been assigned yet
    pub fn unassigned(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    pub fn mouse_over_column(&self) -> Option<usize> {
        self.mouse_over_column
    }

    /// Record the column under the pointer
    ///
    /// Returns true if the slot changed.
    pub fn set_mouse_over_column(&mut self, column: Option<usize>) -> bool {
        if self.mouse_over_column == column {
            return false;
        }
        tracing::trace!(
            "row {:?}: mouse-over column {:?} -> {:?}",
            self.index,
            self.mouse_over_column,
            column
        );
        self.mouse_over_column = column;
        true
    }
}
