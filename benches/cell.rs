//! Benchmarks for per-cell refresh work
//!
//! A grid refreshes every materialized cell after any state change, so
//! these paths run (rows x columns) times per change.
//!
//! Run with: cargo bench cell

use gridcell::cell::TemplateParts;
use gridcell::input::{CurrentCellController, PointerPressedEvent};
use gridcell::model::{ColumnId, ColumnState, GridArena, GridId, GridState, RowState};
use gridcell::Cell;
use winit::event::MouseButton;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

struct Viewport {
    arena: GridArena,
    grid: GridId,
    cells: Vec<Cell>,
}

/// A viewport of `rows` x 8 materialized cells
fn viewport(rows: usize) -> Viewport {
    let mut arena = GridArena::new();
    let grid = arena.add_grid(GridState::new());
    let columns: Vec<ColumnId> = (0..8)
        .map(|i| {
            arena.add_column(
                grid,
                ColumnState::new(format!("C{}", i)).with_classes(["cell", "text"]),
            )
        })
        .collect();

    let mut cells = Vec::with_capacity(rows * columns.len());
    for r in 0..rows {
        let row = arena.add_row(grid, RowState::new(r, r).selected(r % 3 == 0));
        for column in &columns {
            let mut cell = Cell::new();
            cell.set_owning_row(Some(row));
            cell.set_owning_column(&arena, Some(*column));
            cell.apply_template(&arena, TemplateParts::with_right_grid_line(1.0));
            cells.push(cell);
        }
    }
    if let Some(state) = arena.grid_mut(grid) {
        state.set_current(rows / 2, 3);
        state.is_focused = true;
    }

    Viewport { arena, grid, cells }
}

// ============================================================================
// Refresh
// ============================================================================

#[divan::bench(args = [20, 50, 200])]
fn refresh_pseudo_classes(bencher: divan::Bencher, rows: usize) {
    let mut vp = viewport(rows);
    bencher.bench_local(|| {
        for cell in &mut vp.cells {
            cell.update_pseudo_classes(&vp.arena);
        }
    });
}

#[divan::bench(args = [20, 50, 200])]
fn ensure_grid_lines(bencher: divan::Bencher, rows: usize) {
    let mut vp = viewport(rows);
    bencher.bench_local(|| {
        let last = vp.arena.last_visible_column(vp.grid);
        for cell in &mut vp.cells {
            cell.ensure_grid_line(&vp.arena, last);
        }
    });
}

// ============================================================================
// Binding
// ============================================================================

/// Recycling a cell onto another column of the same grid
#[divan::bench]
fn rebind_column(bencher: divan::Bencher) {
    let vp = viewport(1);
    let columns: Vec<ColumnId> = vp
        .arena
        .grid(vp.grid)
        .map_or_else(Vec::new, |g| g.columns().to_vec());
    let mut cell = Cell::new();
    let mut i = 0;
    bencher.bench_local(|| {
        i = (i + 1) % columns.len();
        cell.set_owning_column(&vp.arena, divan::black_box(Some(columns[i])))
    });
}

// ============================================================================
// Input
// ============================================================================

#[divan::bench]
fn press_and_refresh(bencher: divan::Bencher) {
    let mut vp = viewport(50);
    let mut controller = CurrentCellController;
    let mut n = 0;
    bencher.bench_local(|| {
        n = (n + 7) % vp.cells.len();
        let mut event = PointerPressedEvent::mouse(MouseButton::Left);
        vp.cells[n].pointer_pressed(&mut vp.arena, &mut controller, &mut event);
        for cell in &mut vp.cells {
            cell.update_pseudo_classes(&vp.arena);
        }
        event.handled
    });
}
