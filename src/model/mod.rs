//! Grid model - the rows, columns and grids cells read their state from
//!
//! ```text
//! GridArena
//! ├── GridState    (current/editing cursors, focus, gridlines)
//! ├── RowState     (slot, selection, visibility, mouse-over column)
//! └── ColumnState  (index, cell theme, cell style classes)
//! ```

pub mod arena;
pub mod column;
pub mod grid;
pub mod row;

pub use arena::{ColumnId, GridArena, GridId, RowId};
pub use column::ColumnState;
pub use grid::{CellCoord, EditingCell, GridLinesVisibility, GridState};
pub use row::RowState;
