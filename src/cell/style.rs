//! Style sync between a cell and its owning column
//!
//! The column decides which cell theme and which style classes its cells
//! carry. Assigning a column copies both onto the cell; clearing it removes
//! them again.

use super::Cell;
use crate::model::{ColumnId, GridArena};

/// Ordered set of style class names
///
/// `generation` counts actual mutations so callers can tell whether a write
/// changed anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleClasses {
    names: Vec<String>,
    generation: u64,
}

impl StyleClasses {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of mutations applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the whole set, dropping duplicates
    pub fn replace(&mut self, names: &[String]) {
        let mut next: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !next.contains(name) {
                next.push(name.clone());
            }
        }
        if next != self.names {
            self.names = next;
            self.generation += 1;
        }
    }

    pub fn clear(&mut self) {
        if !self.names.is_empty() {
            self.names.clear();
            self.generation += 1;
        }
    }
}

impl Cell {
    /// Assign the owning column and sync theme and style classes from it
    ///
    /// Re-assigning the column the cell already has is a no-op. Returns true
    /// if the association changed.
    pub fn set_owning_column(&mut self, arena: &GridArena, column: Option<ColumnId>) -> bool {
        if self.owning_column == column {
            return false;
        }
        tracing::debug!(
            "cell column {:?} -> {:?}",
            self.owning_column,
            column
        );
        self.owning_column = column;
        self.on_owning_column_set(arena);
        true
    }

    fn on_owning_column_set(&mut self, arena: &GridArena) {
        let Some(id) = self.owning_column else {
            self.classes.clear();
            self.theme = None;
            return;
        };

        let (theme, classes) = match arena.column(id) {
            Some(column) => (column.cell_theme.clone(), column.cell_style_classes.as_slice()),
            None => {
                tracing::warn!("cell assigned unknown column {:?}", id);
                (None, &[][..])
            }
        };

        if self.theme != theme {
            self.theme = theme;
        }
        self.classes.replace(classes);
    }
}
