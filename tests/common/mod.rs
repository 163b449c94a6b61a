//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridcell::cell::TemplateParts;
use gridcell::input::{CellPointerPressedArgs, GridController, PointerDown, PointerPressedEvent};
use gridcell::model::{ColumnId, ColumnState, GridArena, GridId, GridState, RowId, RowState};
use gridcell::Cell;

/// A grid with `columns` columns ("C0", "C1", ...) and `rows` rows whose
/// slot equals their index
pub struct TestGrid {
    pub arena: GridArena,
    pub grid: GridId,
    pub columns: Vec<ColumnId>,
    pub rows: Vec<RowId>,
}

impl TestGrid {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::with_state(GridState::new(), columns, rows)
    }

    pub fn with_state(state: GridState, columns: usize, rows: usize) -> Self {
        let mut arena = GridArena::new();
        let grid = arena.add_grid(state);
        let columns = (0..columns)
            .map(|i| arena.add_column(grid, ColumnState::new(format!("C{}", i))))
            .collect();
        let rows = (0..rows)
            .map(|i| arena.add_row(grid, RowState::new(i, i)))
            .collect();
        Self {
            arena,
            grid,
            columns,
            rows,
        }
    }

    pub fn grid_state(&self) -> &GridState {
        self.arena.grid(self.grid).unwrap()
    }

    pub fn grid_state_mut(&mut self) -> &mut GridState {
        self.arena.grid_mut(self.grid).unwrap()
    }

    pub fn row_state_mut(&mut self, row: usize) -> &mut RowState {
        let id = self.rows[row];
        self.arena.row_mut(id).unwrap()
    }

    /// Cell bound to `rows[row]` and `columns[column]`, pseudo-classes refreshed
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        bound_cell(&self.arena, Some(self.rows[row]), Some(self.columns[column]))
    }

    /// Cell with a column but no row (header/filler)
    pub fn header_cell(&self, column: usize) -> Cell {
        bound_cell(&self.arena, None, Some(self.columns[column]))
    }

    /// Cell bound like [`TestGrid::cell`] with a right separator in its template
    pub fn templated_cell(&self, row: usize, column: usize) -> Cell {
        let mut cell = Cell::new();
        cell.set_owning_row(Some(self.rows[row]));
        cell.set_owning_column(&self.arena, Some(self.columns[column]));
        cell.apply_template(&self.arena, TemplateParts::with_right_grid_line(1.0));
        cell
    }
}

pub fn bound_cell(arena: &GridArena, row: Option<RowId>, column: Option<ColumnId>) -> Cell {
    let mut cell = Cell::new();
    cell.set_owning_row(row);
    cell.set_owning_column(arena, column);
    cell.update_pseudo_classes(arena);
    cell
}

/// What a [`RecordingController`] was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Notified,
    Focus(GridId),
    Primary(PointerDown),
    Secondary(PointerDown),
}

/// Controller that records every call and returns canned answers
#[derive(Debug, Default)]
pub struct RecordingController {
    pub calls: Vec<Call>,
    /// Mark the event handled during the first-refusal notification
    pub claim_on_notify: bool,
    pub primary_result: bool,
    pub secondary_result: bool,
}

impl RecordingController {
    /// Controller whose selection updates report the press as consumed
    pub fn consuming() -> Self {
        Self {
            primary_result: true,
            secondary_result: true,
            ..Self::default()
        }
    }

    pub fn primary_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Primary(_)))
            .count()
    }

    pub fn secondary_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Secondary(_)))
            .count()
    }

    pub fn focused(&self) -> bool {
        self.calls.iter().any(|c| matches!(c, Call::Focus(_)))
    }
}

impl GridController for RecordingController {
    fn on_cell_pointer_pressed(
        &mut self,
        _arena: &mut GridArena,
        args: &mut CellPointerPressedArgs<'_>,
    ) {
        self.calls.push(Call::Notified);
        if self.claim_on_notify {
            args.event.handled = true;
        }
    }

    fn focus(&mut self, arena: &mut GridArena, grid: GridId) {
        self.calls.push(Call::Focus(grid));
        if let Some(state) = arena.grid_mut(grid) {
            state.is_focused = true;
        }
    }

    fn update_state_on_primary_pointer_down(
        &mut self,
        _arena: &mut GridArena,
        _event: &PointerPressedEvent,
        down: PointerDown,
    ) -> bool {
        self.calls.push(Call::Primary(down));
        self.primary_result
    }

    fn update_state_on_secondary_pointer_down(
        &mut self,
        _arena: &mut GridArena,
        _event: &PointerPressedEvent,
        down: PointerDown,
    ) -> bool {
        self.calls.push(Call::Secondary(down));
        self.secondary_result
    }
}
