//! Data grid cells
//!
//! A [`Cell`] is the smallest unit of a data grid. It keeps almost no state
//! of its own: its position, selection, current/edited status and hover
//! state are all derived from the row, column and grid that own it, which
//! live in a [`GridArena`]. Pointer presses on a cell are routed to the
//! grid's [`GridController`].

pub mod cell;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod model;
pub mod scenario;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use cell::{Cell, PseudoClasses};
pub use config::GridConfig;
pub use input::{GridController, PointerPressedEvent};
pub use model::GridArena;
pub use theme::GridTheme;
