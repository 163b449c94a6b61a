//! Grid configuration persistence
//!
//! Stores grid defaults in `~/.config/gridcell/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{GridLinesVisibility, GridState};
use crate::theme::GridTheme;

/// Grid defaults that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Selected theme id (e.g., "default-dark")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Which gridlines new grids draw
    #[serde(default)]
    pub grid_lines: GridLinesVisibility,
    /// Whether pressing a cell focuses its grid
    #[serde(default = "default_tab_stop")]
    pub tab_stop: bool,
    /// Whether grids fill leftover width with a filler column
    #[serde(default)]
    pub filler_column: bool,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_tab_stop() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            grid_lines: GridLinesVisibility::default(),
            tab_stop: default_tab_stop(),
            filler_column: false,
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Seed a grid's gridline and focus settings
    pub fn apply_to(&self, grid: &mut GridState, theme: &GridTheme) {
        grid.grid_lines = self.grid_lines;
        grid.is_tab_stop = self.tab_stop;
        grid.filler_column_active = self.filler_column;
        grid.vertical_grid_lines_brush = Some(theme.vertical_grid_lines);
        grid.horizontal_grid_lines_brush = Some(theme.horizontal_grid_lines);
    }
}
