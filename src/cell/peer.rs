//! Accessibility snapshot of a cell

use serde::Serialize;

use super::Cell;
use crate::model::GridArena;

/// How assistive technology decides whether a cell is offscreen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OffscreenBehavior {
    /// Offscreen when clipped out of the grid's viewport
    FromClip,
}

/// What the accessibility layer is told about a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellAutomationPeer {
    pub class_name: &'static str,
    /// Header of the owning column, used as the accessible name
    pub name: String,
    pub row_index: Option<usize>,
    pub column_index: Option<usize>,
    pub is_selected: bool,
    pub is_current: bool,
    pub is_edited: bool,
    pub is_valid: bool,
    pub is_keyboard_focusable: bool,
    pub offscreen: OffscreenBehavior,
}

impl Cell {
    /// Build the accessibility peer for this cell
    pub fn automation_peer(&self, arena: &GridArena) -> CellAutomationPeer {
        let name = self
            .owning_column
            .and_then(|id| arena.column(id))
            .map(|column| column.header.clone())
            .unwrap_or_default();
        let is_selected = self
            .owning_row
            .and_then(|id| arena.row(id))
            .is_some_and(|row| row.is_selected);

        CellAutomationPeer {
            class_name: "DataGridCell",
            name,
            row_index: self.row_index(arena),
            column_index: self.column_index(arena),
            is_selected,
            is_current: self.is_current(arena),
            is_edited: self.is_edited(arena),
            is_valid: self.is_valid,
            is_keyboard_focusable: Self::FOCUSABLE,
            offscreen: OffscreenBehavior::FromClip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnState, GridState, RowState};

    #[test]
    fn test_peer_reports_position_and_header() {
        let mut arena = GridArena::new();
        let grid = arena.add_grid(GridState::new());
        let column = arena.add_column(grid, ColumnState::new("Amount"));
        let row = arena.add_row(grid, RowState::new(3, 3).selected(true));
        arena.grid_mut(grid).unwrap().set_current(3, 0);

        let mut cell = Cell::new();
        cell.set_owning_row(Some(row));
        cell.set_owning_column(&arena, Some(column));

        let peer = cell.automation_peer(&arena);
        assert_eq!(peer.name, "Amount");
        assert_eq!(peer.row_index, Some(3));
        assert_eq!(peer.column_index, Some(0));
        assert!(peer.is_selected);
        assert!(peer.is_current);
        assert!(!peer.is_edited);
        assert_eq!(peer.offscreen, OffscreenBehavior::FromClip);
    }

    #[test]
    fn test_peer_for_unbound_cell() {
        let arena = GridArena::new();
        let peer = Cell::new().automation_peer(&arena);
        assert!(peer.name.is_empty());
        assert!(peer.row_index.is_none());
        assert!(!peer.is_current);
    }
}
