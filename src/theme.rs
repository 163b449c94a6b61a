//! Theme system for grid cells
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! A theme carries the gridline brushes and a set of named cell themes.
//! Columns refer to a cell theme by id; cells resolve their presentation
//! flags into colors through [`CellTheme::paint`].
//!
//! Theme loading priority:
//! 1. User config: `~/.config/gridcell/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

use crate::cell::PseudoClasses;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");

/// Cell theme used when a column names none
pub const DEFAULT_CELL_THEME: &str = "default";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/gridcell/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    /// Display name from YAML (e.g., "Default Dark")
    pub name: String,
    pub source: ThemeSource,
}

/// Get the user's theme directory
pub fn get_user_themes_dir() -> Option<PathBuf> {
    crate::config_paths::themes_dir()
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<GridTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    GridTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<GridTheme, String> {
    if let Some(user_dir) = get_user_themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    GridTheme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = get_user_themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                        if seen_ids.insert(id.to_string()) {
                            let name = extract_theme_name(&path).unwrap_or_else(|| id.to_string());
                            themes.push(ThemeInfo {
                                id: id.to_string(),
                                name,
                                source: ThemeSource::User,
                            });
                        }
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = GridTheme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// Extract theme name from YAML file without full parsing
fn extract_theme_name(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("name:") {
            let value = trimmed.strip_prefix("name:")?.trim();
            let value = value.trim_matches('"').trim_matches('\'');
            return Some(value.to_string());
        }
    }
    None
}

// ============================================================================
// Colors
// ============================================================================

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for framebuffer renderers
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// ============================================================================
// Raw theme data (YAML)
// ============================================================================

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub grid: GridThemeData,
    #[serde(default)]
    pub cells: BTreeMap<String, CellThemeData>,
}

/// Gridline brushes (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct GridThemeData {
    pub vertical_grid_lines: String,
    pub horizontal_grid_lines: String,
}

/// Cell colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct CellThemeData {
    pub background: String,
    pub foreground: String,
    pub selected_background: String,
    pub current_border: String,
    pub invalid_border: String,
    #[serde(default)]
    pub hover_background: Option<String>,
}

// ============================================================================
// Resolved themes
// ============================================================================

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub name: String,
    pub vertical_grid_lines: Color,
    pub horizontal_grid_lines: Color,
    /// Cell themes by id
    pub cells: BTreeMap<String, CellTheme>,
}

/// Colors for one kind of cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTheme {
    pub id: String,
    pub background: Color,
    pub foreground: Color,
    pub selected_background: Color,
    pub current_border: Color,
    pub invalid_border: Color,
    /// Background under the pointer (None = unchanged)
    pub hover_background: Option<Color>,
}

/// What the rendering layer paints for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPaint {
    pub background: Color,
    pub foreground: Color,
    pub border: Option<Color>,
}

impl CellTheme {
    /// Resolve presentation flags into colors
    ///
    /// Selection beats hover for the background; an invalid border beats
    /// the current-cell border.
    pub fn paint(&self, flags: &PseudoClasses, mouse_over: bool) -> CellPaint {
        let background = if flags.selected {
            self.selected_background
        } else if mouse_over {
            self.hover_background.unwrap_or(self.background)
        } else {
            self.background
        };

        let border = if flags.invalid {
            Some(self.invalid_border)
        } else if flags.current {
            Some(self.current_border)
        } else {
            None
        };

        CellPaint {
            background,
            foreground: self.foreground,
            border,
        }
    }

    fn from_data(id: &str, data: &CellThemeData) -> Result<Self, String> {
        Ok(CellTheme {
            id: id.to_string(),
            background: Color::from_hex(&data.background)?,
            foreground: Color::from_hex(&data.foreground)?,
            selected_background: Color::from_hex(&data.selected_background)?,
            current_border: Color::from_hex(&data.current_border)?,
            invalid_border: Color::from_hex(&data.invalid_border)?,
            hover_background: data
                .hover_background
                .as_deref()
                .map(Color::from_hex)
                .transpose()?,
        })
    }

    /// Default dark cell colors
    pub fn default_dark() -> Self {
        Self {
            id: DEFAULT_CELL_THEME.to_string(),
            background: Color::rgb(0x1E, 0x1E, 0x1E),
            foreground: Color::rgb(0xD4, 0xD4, 0xD4),
            selected_background: Color::rgb(0x26, 0x4F, 0x78),
            current_border: Color::rgb(0x00, 0x7A, 0xCC),
            invalid_border: Color::rgb(0xF4, 0x47, 0x47),
            hover_background: Some(Color::rgb(0x2A, 0x2D, 0x2E)),
        }
    }
}

impl GridTheme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        GridTheme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let mut cells = BTreeMap::new();
        for (id, cell) in &data.cells {
            cells.insert(id.clone(), CellTheme::from_data(id, cell)?);
        }
        if !cells.contains_key(DEFAULT_CELL_THEME) {
            cells.insert(DEFAULT_CELL_THEME.to_string(), CellTheme::default_dark());
        }

        Ok(GridTheme {
            name: data.name,
            vertical_grid_lines: Color::from_hex(&data.grid.vertical_grid_lines)?,
            horizontal_grid_lines: Color::from_hex(&data.grid.horizontal_grid_lines)?,
            cells,
        })
    }

    /// Default dark theme (used when YAML themes fail to load)
    pub fn default_dark() -> Self {
        let mut cells = BTreeMap::new();
        cells.insert(DEFAULT_CELL_THEME.to_string(), CellTheme::default_dark());
        Self {
            name: "Default Dark".to_string(),
            vertical_grid_lines: Color::rgb(0x3C, 0x3C, 0x3C),
            horizontal_grid_lines: Color::rgb(0x2D, 0x2D, 0x2D),
            cells,
        }
    }

    /// Look up a cell theme, falling back to the default cell theme
    pub fn cell_theme(&self, id: Option<&str>) -> Option<&CellTheme> {
        id.and_then(|id| self.cells.get(id))
            .or_else(|| self.cells.get(DEFAULT_CELL_THEME))
    }
}

impl Default for GridTheme {
    fn default() -> Self {
        Self::default_dark()
    }
}
