//! Pointer routing for a cell
//!
//! ```text
//! press ─► grid first refusal ─► handled? stop
//!                               └► primary   ─► focus grid ─► primary update
//!                               └► secondary ─► focus grid ─► secondary update
//! ```
//!
//! Primary presses from touch or pen are never marked handled here, so a
//! scroll gesture recognizer further down can still claim the same event.
//! The secondary path has no such exception.

use super::Cell;
use crate::input::{CellPointerPressedArgs, GridController, PointerDown, PointerPressedEvent};
use crate::model::{GridArena, GridId};

impl Cell {
    /// Route a pointer press on this cell to the grid
    ///
    /// Cells without a grid (the corner header cells) ignore presses.
    pub fn pointer_pressed<C>(
        &self,
        arena: &mut GridArena,
        controller: &mut C,
        event: &mut PointerPressedEvent,
    ) where
        C: GridController + ?Sized,
    {
        let Some(grid) = self.owning_grid(arena) else {
            tracing::trace!("pointer pressed on cell without grid, ignoring");
            return;
        };

        let mut args = CellPointerPressedArgs {
            cell: self,
            grid,
            row: self.owning_row,
            column: self.owning_column,
            event: &mut *event,
        };
        controller.on_cell_pointer_pressed(arena, &mut args);
        if event.handled {
            tracing::trace!("pointer pressed handled by grid notification");
            return;
        }

        if event.is_primary() {
            self.focus_grid(arena, controller, grid);
            if let Some(down) = self.pointer_down(arena, grid, event) {
                let handled =
                    controller.update_state_on_primary_pointer_down(arena, event, down);
                if !event.pointer.is_gesture_capable() {
                    event.handled = handled;
                }
                tracing::trace!(
                    "primary press at {:?}/{:?}: handled={} pointer={:?}",
                    down.slot,
                    down.column_index,
                    handled,
                    event.pointer
                );
            }
        } else if event.is_secondary() {
            self.focus_grid(arena, controller, grid);
            if let Some(down) = self.pointer_down(arena, grid, event) {
                event.handled =
                    controller.update_state_on_secondary_pointer_down(arena, event, down);
            }
        }
    }

    /// Pointer moved onto this cell
    pub fn pointer_entered(&self, arena: &mut GridArena) {
        if self.owning_row.is_none() || self.is_mouse_over(arena) {
            return;
        }
        let column = self.column_index(arena);
        if let Some(row) = self.owning_row.and_then(|id| arena.row_mut(id)) {
            row.set_mouse_over_column(column);
        }
    }

    /// Pointer left this cell
    ///
    /// Only clears the row's mouse-over column if it still points here.
    pub fn pointer_exited(&self, arena: &mut GridArena) {
        if !self.is_mouse_over(arena) {
            return;
        }
        if let Some(row) = self.owning_row.and_then(|id| arena.row_mut(id)) {
            row.set_mouse_over_column(None);
        }
    }

    fn focus_grid<C>(&self, arena: &mut GridArena, controller: &mut C, grid: GridId)
    where
        C: GridController + ?Sized,
    {
        if arena.grid(grid).is_some_and(|g| g.is_tab_stop) {
            controller.focus(arena, grid);
        }
    }

    fn pointer_down(
        &self,
        arena: &GridArena,
        grid: GridId,
        event: &PointerPressedEvent,
    ) -> Option<PointerDown> {
        let row_id = self.owning_row?;
        let row = arena.row(row_id)?;
        Some(PointerDown {
            grid,
            row: row_id,
            column_index: self.column_index(arena),
            slot: row.slot,
            allow_edit: !event.handled,
        })
    }
}
