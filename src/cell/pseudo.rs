//! Presentation flags of a cell
//!
//! Renderers subscribe to this value as a whole. It is recomputed wholesale
//! by [`Cell::update_pseudo_classes`](super::Cell::update_pseudo_classes),
//! never toggled flag by flag.

use serde::Serialize;

pub const SELECTED: &str = ":selected";
pub const CURRENT: &str = ":current";
pub const EDITED: &str = ":edited";
pub const INVALID: &str = ":invalid";
pub const FOCUS: &str = ":focus";

/// Flags derived from the cell's row, column and grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PseudoClasses {
    /// The owning row is selected
    pub selected: bool,
    /// The cell is under the grid's current cursor
    pub current: bool,
    /// The cell is in edit mode
    pub edited: bool,
    /// The cell failed validation
    pub invalid: bool,
    /// The grid has focus and the cell is current
    pub focus: bool,
}

impl PseudoClasses {
    /// Names of the flags that are set, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.selected, SELECTED),
            (self.current, CURRENT),
            (self.edited, EDITED),
            (self.invalid, INVALID),
            (self.focus, FOCUS),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}

impl std::fmt::Display for PseudoClasses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let names: Vec<&str> = self.names().collect();
        write!(f, "{}", names.join(" "))
    }
}
