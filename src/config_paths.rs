//! Where gridcell keeps its files
//!
//! ```text
//! <config dir>/
//! ├── config.yaml   grid defaults (GridConfig)
//! ├── themes/       user grid themes, {id}.yaml
//! └── logs/         daily rolling gridcell.log
//! ```
//!
//! `<config dir>` is `$GRIDCELL_CONFIG_DIR` when set. Otherwise it is
//! `gridcell` under the platform config home: `$XDG_CONFIG_HOME` or
//! `~/.config` on Unix/macOS, `%APPDATA%` on Windows.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "gridcell";

/// Overrides the whole config directory (scripts, CI, sandboxed runs)
pub const CONFIG_DIR_ENV: &str = "GRIDCELL_CONFIG_DIR";

#[cfg(target_os = "windows")]
fn platform_config_home() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_home() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

fn resolve_config_dir(overridden: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match overridden.filter(|dir| !dir.is_empty()) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home.map(|home| home.join(APP_DIR)),
    }
}

/// Base directory for config, themes and logs
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(env::var_os(CONFIG_DIR_ENV), platform_config_home())
}

/// Directory searched for user themes before the builtins
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// The persisted [`GridConfig`](crate::config::GridConfig)
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join("logs");
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
