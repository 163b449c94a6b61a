//! Arena owning grids, rows and columns
//!
//! Cells never own their row, column or grid. They hold ids into this arena
//! and resolve them on every read, so reassigning or removing a row/column
//! is immediately visible to every cell that refers to it.

use std::collections::HashMap;

use super::column::ColumnState;
use super::grid::GridState;
use super::row::RowState;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(pub u64);

/// Unique identifier for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

/// Unique identifier for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(pub u64);

// ============================================================================
// Arena
// ============================================================================

/// Storage for every grid, row and column a set of cells can refer to
#[derive(Debug, Default)]
pub struct GridArena {
    grids: HashMap<GridId, GridState>,
    rows: HashMap<RowId, RowState>,
    columns: HashMap<ColumnId, ColumnState>,
    next_grid_id: u64,
    next_row_id: u64,
    next_column_id: u64,
}

impl GridArena {
    pub fn new() -> Self {
        Self::default()
    }

    // === Grids ===

    pub fn add_grid(&mut self, grid: GridState) -> GridId {
        let id = GridId(self.next_grid_id);
        self.next_grid_id += 1;
        self.grids.insert(id, grid);
        id
    }

    pub fn grid(&self, id: GridId) -> Option<&GridState> {
        self.grids.get(&id)
    }

    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut GridState> {
        self.grids.get_mut(&id)
    }

    // === Columns ===

    /// Append a column to a grid, assigning its grid and display index
    ///
    /// If the grid does not exist the column is stored detached.
    pub fn add_column(&mut self, grid: GridId, mut column: ColumnState) -> ColumnId {
        let id = ColumnId(self.next_column_id);
        self.next_column_id += 1;

        match self.grids.get_mut(&grid) {
            Some(state) => {
                column.grid = Some(grid);
                column.index = Some(state.columns.len());
                state.columns.push(id);
            }
            None => {
                tracing::warn!("add_column: unknown grid {:?}, column left detached", grid);
                column.grid = None;
                column.index = None;
            }
        }

        self.columns.insert(id, column);
        id
    }

    /// Store a column that belongs to no grid
    pub fn add_detached_column(&mut self, mut column: ColumnState) -> ColumnId {
        let id = ColumnId(self.next_column_id);
        self.next_column_id += 1;
        column.grid = None;
        column.index = None;
        self.columns.insert(id, column);
        id
    }

    pub fn column(&self, id: ColumnId) -> Option<&ColumnState> {
        self.columns.get(&id)
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut ColumnState> {
        self.columns.get_mut(&id)
    }

    /// Remove a column and reindex the columns after it
    pub fn remove_column(&mut self, id: ColumnId) -> Option<ColumnState> {
        let column = self.columns.remove(&id)?;
        if let Some(grid) = column.grid.and_then(|g| self.grids.get_mut(&g)) {
            grid.columns.retain(|c| *c != id);
            for (index, remaining) in grid.columns.iter().enumerate() {
                if let Some(state) = self.columns.get_mut(remaining) {
                    state.index = Some(index);
                }
            }
        }
        Some(column)
    }

    /// Last column of a grid in display order that is visible
    pub fn last_visible_column(&self, grid: GridId) -> Option<ColumnId> {
        let grid = self.grids.get(&grid)?;
        grid.columns.iter().rev().copied().find(|id| {
            self.columns
                .get(id)
                .is_some_and(|column| column.is_visible)
        })
    }

    // === Rows ===

    pub fn add_row(&mut self, grid: GridId, mut row: RowState) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        row.grid = self.grids.contains_key(&grid).then_some(grid);
        self.rows.insert(id, row);
        id
    }

    /// Store a row that belongs to no grid
    pub fn add_detached_row(&mut self, mut row: RowState) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        row.grid = None;
        self.rows.insert(id, row);
        id
    }

    pub fn row(&self, id: RowId) -> Option<&RowState> {
        self.rows.get(&id)
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut RowState> {
        self.rows.get_mut(&id)
    }

    /// Re-parent a row (used when a pooled row is handed to another grid)
    pub fn move_row(&mut self, id: RowId, grid: Option<GridId>) {
        let grid = grid.filter(|g| self.grids.contains_key(g));
        if let Some(row) = self.rows.get_mut(&id) {
            row.grid = grid;
        }
    }

    pub fn remove_row(&mut self, id: RowId) -> Option<RowState> {
        let row = self.rows.remove(&id)?;
        if let Some(grid) = row.grid.and_then(|g| self.grids.get_mut(&g)) {
            if grid.editing.is_some_and(|e| e.row == id) {
                grid.editing = None;
            }
        }
        Some(row)
    }

    /// Ids of every row belonging to a grid
    pub fn rows_in_grid(&self, grid: GridId) -> impl Iterator<Item = RowId> + '_ {
        self.rows
            .iter()
            .filter(move |(_, row)| row.grid == Some(grid))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with_columns(headers: &[&str]) -> (GridArena, GridId, Vec<ColumnId>) {
        let mut arena = GridArena::new();
        let grid = arena.add_grid(GridState::new());
        let columns = headers
            .iter()
            .map(|h| arena.add_column(grid, ColumnState::new(*h)))
            .collect();
        (arena, grid, columns)
    }

    #[test]
    fn test_add_column_assigns_grid_and_index() {
        let (arena, grid, columns) = arena_with_columns(&["A", "B", "C"]);
        for (i, id) in columns.iter().enumerate() {
            let column = arena.column(*id).unwrap();
            assert_eq!(column.grid, Some(grid));
            assert_eq!(column.index, Some(i));
        }
        assert_eq!(arena.grid(grid).unwrap().columns(), columns.as_slice());
    }

    #[test]
    fn test_add_column_to_unknown_grid_is_detached() {
        let mut arena = GridArena::new();
        let id = arena.add_column(GridId(42), ColumnState::new("X"));
        let column = arena.column(id).unwrap();
        assert!(column.grid.is_none());
        assert!(column.index.is_none());
    }

    #[test]
    fn test_remove_column_reindexes() {
        let (mut arena, _grid, columns) = arena_with_columns(&["A", "B", "C"]);
        arena.remove_column(columns[0]).unwrap();
        assert!(arena.column(columns[0]).is_none());
        assert_eq!(arena.column(columns[1]).unwrap().index, Some(0));
        assert_eq!(arena.column(columns[2]).unwrap().index, Some(1));
    }

    #[test]
    fn test_last_visible_column_skips_hidden() {
        let (mut arena, grid, columns) = arena_with_columns(&["A", "B", "C"]);
        assert_eq!(arena.last_visible_column(grid), Some(columns[2]));

        arena.column_mut(columns[2]).unwrap().is_visible = false;
        assert_eq!(arena.last_visible_column(grid), Some(columns[1]));
    }

    #[test]
    fn test_add_row_links_grid() {
        let (mut arena, grid, _) = arena_with_columns(&["A"]);
        let row = arena.add_row(grid, RowState::new(0, 0));
        assert_eq!(arena.row(row).unwrap().grid, Some(grid));
        assert_eq!(arena.rows_in_grid(grid).collect::<Vec<_>>(), vec![row]);
    }

    #[test]
    fn test_move_row_to_other_grid() {
        let (mut arena, first, _) = arena_with_columns(&["A"]);
        let second = arena.add_grid(GridState::new());
        let row = arena.add_row(first, RowState::new(0, 0));

        arena.move_row(row, Some(second));
        assert_eq!(arena.row(row).unwrap().grid, Some(second));

        arena.move_row(row, None);
        assert!(arena.row(row).unwrap().grid.is_none());
    }

    #[test]
    fn test_remove_row_clears_editing_cursor() {
        let (mut arena, grid, _) = arena_with_columns(&["A"]);
        let row = arena.add_row(grid, RowState::new(0, 0));
        arena.grid_mut(grid).unwrap().begin_edit(row, 0);

        arena.remove_row(row).unwrap();
        assert!(arena.grid(grid).unwrap().editing.is_none());
        assert!(arena.row(row).is_none());
    }
}
