//! Column state read by cells

use super::arena::GridId;

/// A column of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnState {
    /// Grid the column belongs to (assigned by the arena)
    pub grid: Option<GridId>,
    /// Display index within the grid (assigned by the arena)
    pub index: Option<usize>,
    pub header: String,
    pub is_visible: bool,
    /// Id of the cell theme applied to this column's cells
    pub cell_theme: Option<String>,
    /// Style classes applied to this column's cells
    pub cell_style_classes: Vec<String>,
}

impl Default for ColumnState {
    fn default() -> Self {
        Self {
            grid: None,
            index: None,
            header: String::new(),
            is_visible: true,
            cell_theme: None,
            cell_style_classes: Vec::new(),
        }
    }
}

impl ColumnState {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.cell_theme = Some(theme.into());
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cell_style_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let column = ColumnState::new("Name")
            .with_theme("accent")
            .with_classes(["numeric", "right"]);

        assert_eq!(column.header, "Name");
        assert_eq!(column.cell_theme.as_deref(), Some("accent"));
        assert_eq!(column.cell_style_classes, vec!["numeric", "right"]);
        assert!(column.is_visible);
        assert!(column.index.is_none());
    }
}
