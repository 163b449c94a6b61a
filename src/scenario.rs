//! Scripted grid scenarios
//!
//! A scenario describes one grid in YAML (columns, rows, and the cells
//! materialized for them) plus a list of input steps. Replaying it drives
//! real [`Cell`]s through the same calls a grid widget would make, and
//! reports the resulting presentation state.
//!
//! ```yaml
//! grid:
//!   current: { slot: 0, column: 1 }
//!   focused: true
//! columns:
//!   - header: Name
//!   - header: Amount
//!     theme: numeric
//! rows:
//!   - {}
//!   - selected: true
//! cells:
//!   - { row: 0, column: 0 }
//!   - { row: 0, column: 1 }
//! steps:
//!   - press: { cell: 0 }
//!   - press: { cell: 1, ctrl: true }
//!   - enter: { cell: 1 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::ModifiersState;

use crate::cell::{Cell, PseudoClasses, TemplateParts};
use crate::config::GridConfig;
use crate::input::{GridController, PointerKind, PointerPressedEvent};
use crate::model::{
    CellCoord, ColumnId, ColumnState, GridArena, GridId, GridLinesVisibility, GridState, RowId,
    RowState,
};
use crate::theme::{CellPaint, GridTheme};

fn yes() -> bool {
    true
}

// ============================================================================
// Scenario description
// ============================================================================

/// A grid plus the input to replay against it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub grid: GridSetup,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub rows: Vec<RowDef>,
    #[serde(default)]
    pub cells: Vec<CellDef>,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

/// Grid state; unset fields come from [`GridConfig`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridSetup {
    #[serde(default)]
    pub current: Option<CellCoord>,
    #[serde(default)]
    pub editing: Option<EditingDef>,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub grid_lines: Option<GridLinesVisibility>,
    #[serde(default)]
    pub tab_stop: Option<bool>,
    #[serde(default)]
    pub filler_column: Option<bool>,
}

/// Editing cursor, with `row` indexing into the scenario's rows
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EditingDef {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnDef {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default = "yes")]
    pub visible: bool,
}

/// A row; slot and index default to the row's position in the list
#[derive(Debug, Clone, Deserialize)]
pub struct RowDef {
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub slot: Option<usize>,
    /// Row has not been given a slot yet
    #[serde(default)]
    pub unassigned: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "yes")]
    pub visible: bool,
}

impl Default for RowDef {
    fn default() -> Self {
        Self {
            index: None,
            slot: None,
            unassigned: false,
            selected: false,
            visible: true,
        }
    }
}

/// A materialized cell; a missing row makes a header/filler cell
#[derive(Debug, Clone, Deserialize)]
pub struct CellDef {
    #[serde(default)]
    pub row: Option<usize>,
    #[serde(default)]
    pub column: Option<usize>,
    #[serde(default = "yes")]
    pub valid: bool,
    /// Whether the cell's template has a right separator
    #[serde(default = "yes")]
    pub grid_line: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonName {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<ButtonName> for MouseButton {
    fn from(button: ButtonName) -> Self {
        match button {
            ButtonName::Left => MouseButton::Left,
            ButtonName::Right => MouseButton::Right,
            ButtonName::Middle => MouseButton::Middle,
        }
    }
}

fn one() -> u8 {
    1
}

/// One scripted input; cells are referred to by position in `cells`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Press {
        cell: usize,
        #[serde(default)]
        button: ButtonName,
        #[serde(default)]
        pointer: PointerKind,
        #[serde(default = "one")]
        clicks: u8,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
    },
    Enter {
        cell: usize,
    },
    Exit {
        cell: usize,
    },
    SetValid {
        cell: usize,
        valid: bool,
    },
    Focus {
        focused: bool,
    },
    HideColumn {
        column: usize,
    },
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    /// Build the grid and materialize the cells
    pub fn build(&self, config: &GridConfig, theme: GridTheme) -> Result<Replay, String> {
        let mut grid_state = GridState::new();
        config.apply_to(&mut grid_state, &theme);
        if let Some(grid_lines) = self.grid.grid_lines {
            grid_state.grid_lines = grid_lines;
        }
        if let Some(tab_stop) = self.grid.tab_stop {
            grid_state.is_tab_stop = tab_stop;
        }
        if let Some(filler) = self.grid.filler_column {
            grid_state.filler_column_active = filler;
        }
        grid_state.current = self.grid.current;
        grid_state.is_focused = self.grid.focused;

        let mut arena = GridArena::new();
        let grid = arena.add_grid(grid_state);

        let columns: Vec<ColumnId> = self
            .columns
            .iter()
            .map(|def| {
                let mut column = ColumnState::new(def.header.clone())
                    .with_classes(def.classes.iter().cloned())
                    .visible(def.visible);
                column.cell_theme = def.theme.clone();
                arena.add_column(grid, column)
            })
            .collect();

        let rows: Vec<RowId> = self
            .rows
            .iter()
            .enumerate()
            .map(|(position, def)| {
                let index = def.index.unwrap_or(position);
                let row = if def.unassigned {
                    RowState::unassigned(index)
                } else {
                    RowState::new(index, def.slot.unwrap_or(position))
                };
                arena.add_row(grid, row.selected(def.selected).visible(def.visible))
            })
            .collect();

        if let Some(editing) = self.grid.editing {
            let row = *rows
                .get(editing.row)
                .ok_or_else(|| format!("editing row {} does not exist", editing.row))?;
            if let Some(state) = arena.grid_mut(grid) {
                state.begin_edit(row, editing.column);
            }
        }

        let mut cells = Vec::with_capacity(self.cells.len());
        for (n, def) in self.cells.iter().enumerate() {
            let row = def
                .row
                .map(|r| {
                    rows.get(r)
                        .copied()
                        .ok_or_else(|| format!("cell {}: row {} does not exist", n, r))
                })
                .transpose()?;
            let column = def
                .column
                .map(|c| {
                    columns
                        .get(c)
                        .copied()
                        .ok_or_else(|| format!("cell {}: column {} does not exist", n, c))
                })
                .transpose()?;

            let mut cell = Cell::new();
            cell.set_owning_row(row);
            cell.set_owning_column(&arena, column);
            cell.set_valid(def.valid);
            let parts = if def.grid_line {
                TemplateParts::with_right_grid_line(1.0)
            } else {
                TemplateParts::default()
            };
            cell.apply_template(&arena, parts);
            cells.push(cell);
        }

        let mut replay = Replay {
            arena,
            grid,
            rows,
            columns,
            cells,
            theme,
            presses: Vec::new(),
        };
        replay.sync();
        Ok(replay)
    }
}

// ============================================================================
// Replay
// ============================================================================

fn cell_at(cells: &[Cell], step: usize, cell: usize) -> Result<&Cell, String> {
    cells
        .get(cell)
        .ok_or_else(|| format!("step {}: cell {} does not exist", step, cell))
}

/// A built scenario, ready to receive steps
#[derive(Debug)]
pub struct Replay {
    pub arena: GridArena,
    pub grid: GridId,
    pub rows: Vec<RowId>,
    pub columns: Vec<ColumnId>,
    pub cells: Vec<Cell>,
    pub theme: GridTheme,
    presses: Vec<PressOutcome>,
}

/// Whether a scripted press ended up handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressOutcome {
    pub step: usize,
    pub cell: usize,
    pub handled: bool,
}

/// Final state of one cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellReport {
    pub cell: usize,
    pub row_index: Option<usize>,
    pub column_index: Option<usize>,
    pub pseudo_classes: PseudoClasses,
    pub mouse_over: bool,
    pub grid_line_visible: Option<bool>,
    pub theme: Option<String>,
    pub classes: Vec<String>,
    pub paint: Option<CellPaint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub presses: Vec<PressOutcome>,
    pub cells: Vec<CellReport>,
}

impl Replay {
    /// Run every step, refreshing cells after each one
    pub fn run<C>(&mut self, steps: &[Step], controller: &mut C) -> Result<(), String>
    where
        C: GridController + ?Sized,
    {
        for (n, step) in steps.iter().enumerate() {
            tracing::debug!("step {}: {:?}", n, step);
            self.apply(n, step, controller)?;
            self.sync();
        }
        Ok(())
    }

    fn apply<C>(&mut self, n: usize, step: &Step, controller: &mut C) -> Result<(), String>
    where
        C: GridController + ?Sized,
    {
        match *step {
            Step::Press {
                cell,
                button,
                pointer,
                clicks,
                shift,
                ctrl,
            } => {
                let mut modifiers = ModifiersState::empty();
                modifiers.set(ModifiersState::SHIFT, shift);
                modifiers.set(ModifiersState::CONTROL, ctrl);
                let mut event = PointerPressedEvent::new(pointer, button.into())
                    .with_click_count(clicks)
                    .with_modifiers(modifiers);
                let target = cell_at(&self.cells, n, cell)?;
                target.pointer_pressed(&mut self.arena, controller, &mut event);
                self.presses.push(PressOutcome {
                    step: n,
                    cell,
                    handled: event.handled,
                });
            }
            Step::Enter { cell } => {
                let target = cell_at(&self.cells, n, cell)?;
                target.pointer_entered(&mut self.arena);
            }
            Step::Exit { cell } => {
                let target = cell_at(&self.cells, n, cell)?;
                target.pointer_exited(&mut self.arena);
            }
            Step::SetValid { cell, valid } => {
                let target = self
                    .cells
                    .get_mut(cell)
                    .ok_or_else(|| format!("step {}: cell {} does not exist", n, cell))?;
                target.set_valid(valid);
            }
            Step::Focus { focused } => {
                if let Some(grid) = self.arena.grid_mut(self.grid) {
                    grid.is_focused = focused;
                }
            }
            Step::HideColumn { column } => {
                let id = *self
                    .columns
                    .get(column)
                    .ok_or_else(|| format!("step {}: column {} does not exist", n, column))?;
                if let Some(state) = self.arena.column_mut(id) {
                    state.is_visible = false;
                }
            }
        }
        Ok(())
    }

    /// What a grid does after any state change: refresh flags and separators
    pub fn sync(&mut self) {
        let last_visible = self.arena.last_visible_column(self.grid);
        for cell in &mut self.cells {
            cell.update_pseudo_classes(&self.arena);
            cell.ensure_grid_line(&self.arena, last_visible);
        }
    }

    pub fn report(&self) -> ReplayReport {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(n, cell)| {
                let mouse_over = cell.is_mouse_over(&self.arena);
                CellReport {
                    cell: n,
                    row_index: cell.row_index(&self.arena),
                    column_index: cell.column_index(&self.arena),
                    pseudo_classes: *cell.pseudo_classes(),
                    mouse_over,
                    grid_line_visible: cell.right_grid_line().map(|line| line.visible),
                    theme: cell.theme().map(str::to_string),
                    classes: cell.classes().iter().map(str::to_string).collect(),
                    paint: self
                        .theme
                        .cell_theme(cell.theme())
                        .map(|t| t.paint(cell.pseudo_classes(), mouse_over)),
                }
            })
            .collect();

        ReplayReport {
            presses: self.presses.clone(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CurrentCellController;

    const SCENARIO: &str = r#"
grid:
  current: { slot: 0, column: 0 }
  focused: true
columns:
  - header: Name
  - header: Amount
    theme: numeric
    classes: [right]
rows:
  - {}
  - selected: true
cells:
  - { row: 0, column: 0 }
  - { row: 0, column: 1 }
  - { row: 1, column: 1 }
steps:
  - press: { cell: 2 }
  - enter: { cell: 1 }
  - set_valid: { cell: 0, valid: false }
"#;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::from_yaml(SCENARIO).unwrap();
        assert_eq!(scenario.columns.len(), 2);
        assert_eq!(scenario.rows.len(), 2);
        assert_eq!(scenario.cells.len(), 3);
        assert!(matches!(
            scenario.steps[0],
            Step::Press {
                cell: 2,
                button: ButtonName::Left,
                pointer: PointerKind::Mouse,
                clicks: 1,
                shift: false,
                ctrl: false
            }
        ));
    }

    #[test]
    fn test_parse_every_step_kind() {
        let yaml = r#"
steps:
  - press: { cell: 1, button: right, pointer: pen, clicks: 2, ctrl: true }
  - enter: { cell: 0 }
  - exit: { cell: 0 }
  - set_valid: { cell: 2, valid: false }
  - focus: { focused: false }
  - hide_column: { column: 1 }
"#;
        let steps = Scenario::from_yaml(yaml).unwrap().steps;
        assert_eq!(steps.len(), 6);
        assert!(matches!(
            steps[0],
            Step::Press {
                cell: 1,
                button: ButtonName::Right,
                pointer: PointerKind::Pen,
                clicks: 2,
                shift: false,
                ctrl: true
            }
        ));
        assert!(matches!(steps[1], Step::Enter { cell: 0 }));
        assert!(matches!(steps[2], Step::Exit { cell: 0 }));
        assert!(matches!(steps[3], Step::SetValid { cell: 2, valid: false }));
        assert!(matches!(steps[4], Step::Focus { focused: false }));
        assert!(matches!(steps[5], Step::HideColumn { column: 1 }));
    }

    #[test]
    fn test_scenario_without_steps_parses() {
        let scenario = Scenario::from_yaml("columns:\n  - header: A\n").unwrap();
        assert!(scenario.steps.is_empty());
    }

    #[test]
    fn test_build_rejects_unknown_row() {
        let scenario = Scenario::from_yaml("cells:\n  - { row: 3 }\n").unwrap();
        let err = scenario
            .build(&GridConfig::default(), GridTheme::default())
            .unwrap_err();
        assert!(err.contains("row 3"));
    }

    #[test]
    fn test_replay_moves_current_cell() {
        let scenario = Scenario::from_yaml(SCENARIO).unwrap();
        let mut replay = scenario
            .build(&GridConfig::default(), GridTheme::default())
            .unwrap();

        let before = replay.report();
        assert!(before.cells[0].pseudo_classes.current);
        assert!(before.cells[0].pseudo_classes.focus);

        replay
            .run(&scenario.steps, &mut CurrentCellController)
            .unwrap();
        let after = replay.report();

        assert_eq!(after.presses.len(), 1);
        assert!(after.presses[0].handled);
        assert!(!after.cells[0].pseudo_classes.current);
        assert!(after.cells[0].pseudo_classes.invalid);
        assert!(after.cells[2].pseudo_classes.current);
        assert!(after.cells[2].pseudo_classes.selected);
        assert!(after.cells[1].mouse_over);
        assert_eq!(after.cells[1].theme.as_deref(), Some("numeric"));
        assert_eq!(after.cells[1].classes, vec!["right"]);
    }

    #[test]
    fn test_last_column_separator_hidden() {
        let scenario = Scenario::from_yaml(SCENARIO).unwrap();
        let replay = scenario
            .build(&GridConfig::default(), GridTheme::default())
            .unwrap();
        let report = replay.report();
        assert_eq!(report.cells[0].grid_line_visible, Some(true));
        assert_eq!(report.cells[1].grid_line_visible, Some(false));
    }
}
