//! A single cell of a data grid
//!
//! A `Cell` is the visual for one (row, column) pair. It is created and
//! recycled by the virtualization layer, which assigns its row and column.
//! Apart from `is_valid`, everything a cell reports is derived on read from
//! the arena:
//!
//! ```text
//! Cell ── owning_row ────► RowState ──┐
//!      └─ owning_column ─► ColumnState ┴─► GridState
//! ```
//!
//! The owning grid is never stored; it is reached through the row, or the
//! column when the cell has no row (header and filler cells).

mod grid_line;
mod peer;
mod pointer;
mod pseudo;
mod style;

pub use grid_line::{RightGridLine, TemplateParts};
pub use peer::{CellAutomationPeer, OffscreenBehavior};
pub use pseudo::PseudoClasses;
pub use style::StyleClasses;

use crate::model::{ColumnId, ColumnState, GridArena, GridId, GridState, RowId, RowState};

/// One addressable cell of a grid
#[derive(Debug, Clone)]
pub struct Cell {
    is_valid: bool,
    owning_row: Option<RowId>,
    owning_column: Option<ColumnId>,
    /// Cell theme override copied from the owning column
    theme: Option<String>,
    classes: StyleClasses,
    pseudo_classes: PseudoClasses,
    right_grid_line: Option<RightGridLine>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            is_valid: true,
            owning_row: None,
            owning_column: None,
            theme: None,
            classes: StyleClasses::default(),
            pseudo_classes: PseudoClasses::default(),
            right_grid_line: None,
        }
    }
}

/// Grid, row and column of a cell, all resolved
pub(crate) struct Resolved<'a> {
    pub grid: &'a GridState,
    pub row_id: RowId,
    pub row: &'a RowState,
    pub column: &'a ColumnState,
}

impl Cell {
    /// Cells take keyboard focus
    pub const FOCUSABLE: bool = true;
    /// Tabbing moves between grids, not cells
    pub const IS_TAB_STOP: bool = false;

    pub fn new() -> Self {
        Self::default()
    }

    // === Local state ===

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Set by validation logic; returns true if the value changed
    pub fn set_valid(&mut self, valid: bool) -> bool {
        if self.is_valid == valid {
            return false;
        }
        self.is_valid = valid;
        true
    }

    pub fn pseudo_classes(&self) -> &PseudoClasses {
        &self.pseudo_classes
    }

    pub fn classes(&self) -> &StyleClasses {
        &self.classes
    }

    /// Cell theme id currently applied
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn right_grid_line(&self) -> Option<&RightGridLine> {
        self.right_grid_line.as_ref()
    }

    /// Width of the right separator, 0 when the template has none
    pub fn right_grid_line_width(&self) -> f32 {
        self.right_grid_line.as_ref().map_or(0.0, |line| line.width)
    }

    // === Associations ===

    pub fn owning_row(&self) -> Option<RowId> {
        self.owning_row
    }

    pub fn owning_column(&self) -> Option<ColumnId> {
        self.owning_column
    }

    /// Assigned by the virtualization layer when the cell is (re)used
    pub fn set_owning_row(&mut self, row: Option<RowId>) {
        self.owning_row = row;
    }

    // === Derived state ===

    /// Grid reached through the owning row, else through the owning column
    pub fn owning_grid(&self, arena: &GridArena) -> Option<GridId> {
        self.owning_row
            .and_then(|id| arena.row(id))
            .and_then(|row| row.grid)
            .or_else(|| {
                self.owning_column
                    .and_then(|id| arena.column(id))
                    .and_then(|column| column.grid)
            })
    }

    /// Display index of the owning column
    pub fn column_index(&self, arena: &GridArena) -> Option<usize> {
        self.owning_column
            .and_then(|id| arena.column(id))
            .and_then(|column| column.index)
    }

    /// Data index of the owning row; `None` for header and filler cells
    pub fn row_index(&self, arena: &GridArena) -> Option<usize> {
        self.owning_row
            .and_then(|id| arena.row(id))
            .and_then(|row| row.index)
    }

    /// Whether this cell sits under the grid's current cursor
    pub fn is_current(&self, arena: &GridArena) -> bool {
        self.resolve(arena)
            .is_some_and(|ctx| Self::is_current_in(&ctx))
    }

    /// Whether this cell is the one in edit mode
    pub fn is_edited(&self, arena: &GridArena) -> bool {
        self.resolve(arena)
            .is_some_and(|ctx| Self::is_edited_in(&ctx))
    }

    /// Whether the pointer is over this cell, as tracked by its row
    pub fn is_mouse_over(&self, arena: &GridArena) -> bool {
        let row = self.owning_row.and_then(|id| arena.row(id));
        match (row, self.column_index(arena)) {
            (Some(row), Some(index)) => row.mouse_over_column() == Some(index),
            _ => false,
        }
    }

    pub(crate) fn resolve<'a>(&self, arena: &'a GridArena) -> Option<Resolved<'a>> {
        let grid = arena.grid(self.owning_grid(arena)?)?;
        let row_id = self.owning_row?;
        let row = arena.row(row_id)?;
        let column = arena.column(self.owning_column?)?;
        Some(Resolved {
            grid,
            row_id,
            row,
            column,
        })
    }

    fn is_current_in(ctx: &Resolved<'_>) -> bool {
        match (ctx.grid.current, ctx.row.slot, ctx.column.index) {
            (Some(current), Some(slot), Some(column)) => {
                current.slot == slot && current.column == column
            }
            _ => false,
        }
    }

    fn is_edited_in(ctx: &Resolved<'_>) -> bool {
        match (ctx.grid.editing, ctx.column.index) {
            (Some(editing), Some(column)) => editing.row == ctx.row_id && editing.column == column,
            _ => false,
        }
    }

    // === Presentation ===

    /// Recompute the presentation flags from the row, column and grid
    ///
    /// Cells that are not materialized (no grid, row or column, a hidden row,
    /// or a row without a slot) keep their previous flags.
    pub fn update_pseudo_classes(&mut self, arena: &GridArena) {
        let Some(ctx) = self.resolve(arena) else {
            return;
        };
        if !ctx.row.is_visible || ctx.row.slot.is_none() {
            return;
        }

        let current = Self::is_current_in(&ctx);
        self.pseudo_classes = PseudoClasses {
            selected: ctx.row.is_selected,
            current,
            edited: Self::is_edited_in(&ctx),
            invalid: !self.is_valid,
            focus: ctx.grid.is_focused && current,
        };
    }
}
