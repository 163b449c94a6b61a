use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use gridcell::cli::{CliArgs, Command};
use gridcell::input::CurrentCellController;
use gridcell::scenario::{ReplayReport, Scenario};
use gridcell::theme::{self, GridTheme, ThemeSource};
use gridcell::GridConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    gridcell::tracing::init(args.verbose);

    match args.command {
        Command::Replay {
            path,
            json,
            config,
            theme,
        } => replay(&path, json, config.as_deref(), theme.as_deref()),
        Command::Themes => {
            for info in theme::list_available_themes() {
                let source = match info.source {
                    ThemeSource::User => "user",
                    ThemeSource::Builtin => "builtin",
                };
                println!("{:<20} {:<24} {}", info.id, info.name, source);
            }
            Ok(())
        }
    }
}

fn replay(path: &Path, json: bool, config: Option<&Path>, theme_id: Option<&str>) -> Result<()> {
    let config = match config {
        Some(path) => GridConfig::load_from(path).map_err(|e| anyhow!(e))?,
        None => GridConfig::load(),
    };
    let theme_id = theme_id.unwrap_or(&config.theme);
    let grid_theme = theme::load_theme(theme_id).unwrap_or_else(|e| {
        tracing::warn!("Theme '{}' unavailable ({}), using default", theme_id, e);
        GridTheme::default()
    });

    let scenario = Scenario::load(path).map_err(|e| anyhow!(e))?;
    let mut replay = scenario
        .build(&config, grid_theme)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Invalid scenario {}", path.display()))?;
    replay
        .run(&scenario.steps, &mut CurrentCellController)
        .map_err(|e| anyhow!(e))?;

    let report = replay.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ReplayReport) {
    for press in &report.presses {
        println!(
            "step {:>3}  press cell {:<3} handled={}",
            press.step, press.cell, press.handled
        );
    }
    if !report.presses.is_empty() {
        println!();
    }

    println!(
        "{:<5} {:>4} {:>4}  {:<32} {:<5} {:<5} THEME",
        "CELL", "ROW", "COL", "STATE", "HOVER", "LINE"
    );
    for cell in &report.cells {
        let index = |i: Option<usize>| i.map_or_else(|| "-".to_string(), |i| i.to_string());
        let line = cell
            .grid_line_visible
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        println!(
            "{:<5} {:>4} {:>4}  {:<32} {:<5} {:<5} {}",
            cell.cell,
            index(cell.row_index),
            index(cell.column_index),
            cell.pseudo_classes.to_string(),
            cell.mouse_over,
            line,
            cell.theme.as_deref().unwrap_or("-"),
        );
    }
}
