//! Pointer input routed from cells into the grid
//!
//! A cell does not decide what a click means. It offers the press to the
//! grid first ([`GridController::on_cell_pointer_pressed`]), then forwards
//! primary and secondary presses to the grid's selection state machine.
//! Any stage can stop the rest by marking the event handled.

use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::ModifiersState;

use crate::cell::Cell;
use crate::model::{ColumnId, GridArena, GridId, RowId};

/// Device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Touch and pen presses may start a scroll gesture downstream
    pub fn is_gesture_capable(self) -> bool {
        matches!(self, PointerKind::Touch | PointerKind::Pen)
    }
}

/// A pointer press delivered to a cell
#[derive(Clone, Debug)]
pub struct PointerPressedEvent {
    pub pointer: PointerKind,
    /// Which button went down
    pub button: MouseButton,
    /// Click count: 1=single, 2=double, 3=triple
    pub click_count: u8,
    /// Active keyboard modifiers
    pub modifiers: ModifiersState,
    /// Set once some stage has consumed the event
    pub handled: bool,
}

impl PointerPressedEvent {
    pub fn new(pointer: PointerKind, button: MouseButton) -> Self {
        Self {
            pointer,
            button,
            click_count: 1,
            modifiers: ModifiersState::empty(),
            handled: false,
        }
    }

    /// Press from a mouse
    pub fn mouse(button: MouseButton) -> Self {
        Self::new(PointerKind::Mouse, button)
    }

    pub fn with_click_count(mut self, click_count: u8) -> Self {
        self.click_count = click_count;
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifiersState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Classified by the button that changed, not by every button held.
    /// A right press while the left button is down is secondary.
    #[inline]
    pub fn is_primary(&self) -> bool {
        matches!(self.button, MouseButton::Left)
    }

    #[inline]
    pub fn is_secondary(&self) -> bool {
        matches!(self.button, MouseButton::Right)
    }

    #[inline]
    pub fn shift(&self) -> bool {
        self.modifiers.shift_key()
    }

    #[inline]
    pub fn ctrl(&self) -> bool {
        self.modifiers.control_key()
    }
}

/// Notification raised to the grid before a cell acts on a press
#[derive(Debug)]
pub struct CellPointerPressedArgs<'a> {
    pub cell: &'a Cell,
    pub grid: GridId,
    pub row: Option<RowId>,
    pub column: Option<ColumnId>,
    pub event: &'a mut PointerPressedEvent,
}

/// Where a press landed, as passed to the grid's selection update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub grid: GridId,
    pub row: RowId,
    pub column_index: Option<usize>,
    pub slot: Option<usize>,
    /// False when an earlier stage already handled the event
    pub allow_edit: bool,
}

/// The grid's selection/navigation/editing state machine, as seen by a cell
pub trait GridController {
    /// First refusal on every press; mark `args.event.handled` to stop the cell
    fn on_cell_pointer_pressed(
        &mut self,
        _arena: &mut GridArena,
        _args: &mut CellPointerPressedArgs<'_>,
    ) {
    }

    /// Give the grid input focus
    fn focus(&mut self, arena: &mut GridArena, grid: GridId) {
        if let Some(state) = arena.grid_mut(grid) {
            state.is_focused = true;
        }
    }

    /// Primary button went down on a cell; returns whether it was consumed
    fn update_state_on_primary_pointer_down(
        &mut self,
        arena: &mut GridArena,
        event: &PointerPressedEvent,
        down: PointerDown,
    ) -> bool;

    /// Secondary button went down on a cell; returns whether it was consumed
    fn update_state_on_secondary_pointer_down(
        &mut self,
        arena: &mut GridArena,
        event: &PointerPressedEvent,
        down: PointerDown,
    ) -> bool;
}

/// Minimal controller: presses move the current cursor and select the row
///
/// Primary presses follow the usual extended-selection keys: Ctrl toggles the
/// pressed row and keeps the rest, Shift selects every row between the old
/// current slot and the pressed one. An unmodified second click on the current
/// cell starts editing it. Secondary presses keep an existing selection when
/// they land on a selected row.
#[derive(Debug, Default)]
pub struct CurrentCellController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowSelection {
    Replace,
    Toggle,
    Extend,
    Keep,
}

impl CurrentCellController {
    fn move_current(arena: &mut GridArena, down: PointerDown, selection: RowSelection) -> bool {
        let (Some(slot), Some(column)) = (down.slot, down.column_index) else {
            return false;
        };

        let anchor = arena
            .grid(down.grid)
            .and_then(|grid| grid.current)
            .map_or(slot, |current| current.slot);
        let range = anchor.min(slot)..=anchor.max(slot);

        let rows: Vec<RowId> = arena.rows_in_grid(down.grid).collect();
        for row in rows {
            let Some(state) = arena.row_mut(row) else {
                continue;
            };
            match selection {
                RowSelection::Replace => state.is_selected = row == down.row,
                RowSelection::Toggle if row == down.row => state.is_selected = !state.is_selected,
                RowSelection::Extend => {
                    state.is_selected = state.slot.is_some_and(|s| range.contains(&s));
                }
                RowSelection::Toggle | RowSelection::Keep => {}
            }
        }

        if let Some(grid) = arena.grid_mut(down.grid) {
            if grid.editing.is_some_and(|e| e.row != down.row || e.column != column) {
                grid.end_edit();
            }
            grid.set_current(slot, column);
        }
        true
    }
}

impl GridController for CurrentCellController {
    fn update_state_on_primary_pointer_down(
        &mut self,
        arena: &mut GridArena,
        event: &PointerPressedEvent,
        down: PointerDown,
    ) -> bool {
        let was_current = match (arena.grid(down.grid), down.slot, down.column_index) {
            (Some(grid), Some(slot), Some(column)) => {
                grid.current.is_some_and(|c| c.slot == slot && c.column == column)
            }
            _ => false,
        };

        let selection = if event.shift() {
            RowSelection::Extend
        } else if event.ctrl() {
            RowSelection::Toggle
        } else {
            RowSelection::Replace
        };
        tracing::trace!("primary press on row {:?}: {:?}", down.row, selection);

        if !Self::move_current(arena, down, selection) {
            return false;
        }

        let modified = selection != RowSelection::Replace;
        if down.allow_edit && !modified && (was_current || event.click_count >= 2) {
            if let (Some(grid), Some(column)) = (arena.grid_mut(down.grid), down.column_index) {
                tracing::debug!("begin edit at row {:?}, column {}", down.row, column);
                grid.begin_edit(down.row, column);
            }
        }
        true
    }

    fn update_state_on_secondary_pointer_down(
        &mut self,
        arena: &mut GridArena,
        _event: &PointerPressedEvent,
        down: PointerDown,
    ) -> bool {
        let selection = if arena.row(down.row).is_some_and(|row| row.is_selected) {
            RowSelection::Keep
        } else {
            RowSelection::Replace
        };
        Self::move_current(arena, down, selection)
    }
}
