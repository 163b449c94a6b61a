//! Right-edge separator of a cell
//!
//! The separator is a template part: it only exists once a template that
//! provides one has been applied. Writes go through setters that count
//! invalidations, and unchanged values are never written.

use super::Cell;
use crate::model::{ColumnId, GridArena};
use crate::theme::Color;

/// Separator drawn on the right edge of a cell
#[derive(Debug, Clone, PartialEq)]
pub struct RightGridLine {
    pub fill: Option<Color>,
    pub visible: bool,
    pub width: f32,
    /// Number of writes that required a repaint
    pub invalidations: u32,
}

impl RightGridLine {
    pub fn new(width: f32) -> Self {
        Self {
            fill: None,
            visible: true,
            width,
            invalidations: 0,
        }
    }

    fn set_fill(&mut self, fill: Color) {
        self.fill = Some(fill);
        self.invalidations += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.invalidations += 1;
    }
}

impl Default for RightGridLine {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Named parts found in an applied template
#[derive(Debug, Clone, Default)]
pub struct TemplateParts {
    pub right_grid_line: Option<RightGridLine>,
}

impl TemplateParts {
    /// Template with a separator of the given width
    pub fn with_right_grid_line(width: f32) -> Self {
        Self {
            right_grid_line: Some(RightGridLine::new(width)),
        }
    }
}

impl Cell {
    /// Hook run when the cell's template is (re)applied
    ///
    /// Filler cells (no owning column) never show a separator.
    pub fn apply_template(&mut self, arena: &GridArena, parts: TemplateParts) {
        self.update_pseudo_classes(arena);
        self.right_grid_line = parts.right_grid_line;

        if self.owning_column.is_none() {
            if let Some(line) = self.right_grid_line.as_mut() {
                if line.visible {
                    line.set_visible(false);
                }
            }
        } else {
            self.ensure_grid_line(arena, None);
        }
    }

    /// Sync the separator's brush and visibility with the grid
    ///
    /// The separator is hidden when the grid draws no vertical lines, and
    /// for the last visible column unless a filler column follows it.
    pub fn ensure_grid_line(&mut self, arena: &GridArena, last_visible_column: Option<ColumnId>) {
        let Some(grid) = self.owning_grid(arena).and_then(|id| arena.grid(id)) else {
            return;
        };
        let owning_column = self.owning_column;
        let Some(line) = self.right_grid_line.as_mut() else {
            return;
        };

        if let Some(brush) = grid.vertical_grid_lines_brush {
            if line.fill != Some(brush) {
                line.set_fill(brush);
            }
        }

        let visible = grid.grid_lines.includes_vertical()
            && (grid.filler_column_active || owning_column != last_visible_column);

        if visible != line.visible {
            tracing::trace!("right grid line visible: {} -> {}", line.visible, visible);
            line.set_visible(visible);
        }
    }
}
