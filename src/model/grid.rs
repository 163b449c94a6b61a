//! Grid-level state read by cells
//!
//! The grid owns the current cursor, the editing cursor, focus and the
//! gridline settings. Its selection/navigation state machine lives behind
//! [`crate::input::GridController`]; this record only holds the results.

use serde::{Deserialize, Serialize};

use super::arena::{ColumnId, RowId};
use crate::theme::Color;

/// Which gridlines a grid draws between its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLinesVisibility {
    /// No gridlines
    None,
    /// Only the lines between rows
    Horizontal,
    /// Only the lines between columns
    Vertical,
    /// Both horizontal and vertical lines
    #[default]
    All,
}

impl GridLinesVisibility {
    /// Whether the separators between columns are drawn
    pub fn includes_vertical(self) -> bool {
        matches!(self, GridLinesVisibility::Vertical | GridLinesVisibility::All)
    }

    /// Whether the separators between rows are drawn
    pub fn includes_horizontal(self) -> bool {
        matches!(
            self,
            GridLinesVisibility::Horizontal | GridLinesVisibility::All
        )
    }
}

/// Position of the grid's current cell: a row slot and a column index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCoord {
    pub slot: usize,
    pub column: usize,
}

impl CellCoord {
    pub fn new(slot: usize, column: usize) -> Self {
        Self { slot, column }
    }
}

/// The cell currently in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditingCell {
    pub row: RowId,
    pub column: usize,
}

/// State of one grid as seen by its cells
#[derive(Debug, Clone)]
pub struct GridState {
    /// Keyboard/selection focus target
    pub current: Option<CellCoord>,
    /// Cell in edit mode, if any
    pub editing: Option<EditingCell>,
    /// Whether the grid has input focus
    pub is_focused: bool,
    /// Whether pressing a cell moves focus to the grid
    pub is_tab_stop: bool,
    pub grid_lines: GridLinesVisibility,
    /// Brush for the separators between columns
    pub vertical_grid_lines_brush: Option<Color>,
    /// Brush for the separators between rows
    pub horizontal_grid_lines_brush: Option<Color>,
    /// Whether the synthetic trailing column is taking up leftover width
    pub filler_column_active: bool,
    /// Columns in display order
    pub(crate) columns: Vec<ColumnId>,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            current: None,
            editing: None,
            is_focused: false,
            is_tab_stop: true,
            grid_lines: GridLinesVisibility::default(),
            vertical_grid_lines_brush: None,
            horizontal_grid_lines_brush: None,
            filler_column_active: false,
            columns: Vec::new(),
        }
    }
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid_lines(mut self, grid_lines: GridLinesVisibility) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    pub fn with_tab_stop(mut self, tab_stop: bool) -> Self {
        self.is_tab_stop = tab_stop;
        self
    }

    pub fn with_filler_column(mut self, active: bool) -> Self {
        self.filler_column_active = active;
        self
    }

    pub fn with_vertical_grid_lines_brush(mut self, brush: Color) -> Self {
        self.vertical_grid_lines_brush = Some(brush);
        self
    }

    /// Columns in display order
    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }

    /// Move the current cursor
    pub fn set_current(&mut self, slot: usize, column: usize) {
        self.current = Some(CellCoord::new(slot, column));
    }

    /// Put a cell into edit mode
    pub fn begin_edit(&mut self, row: RowId, column: usize) {
        self.editing = Some(EditingCell { row, column });
    }

    /// Leave edit mode
    pub fn end_edit(&mut self) {
        self.editing = None;
    }
}
