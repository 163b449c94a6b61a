//! Command-line argument parsing for the scenario runner
//!
//! Supports:
//! - Replaying a grid scenario and printing the resulting cell state
//! - Listing available themes

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Replay pointer input against data grid cells
#[derive(Parser, Debug)]
#[command(name = "gridcell", version, about = "Replay pointer input against data grid cells")]
pub struct CliArgs {
    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a scenario file and report every cell
    Replay {
        /// Scenario YAML file
        #[arg(value_name = "SCENARIO")]
        path: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Use this config file instead of the user config
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Override the configured theme
        #[arg(long, value_name = "ID")]
        theme: Option<String>,
    },
    /// List builtin and user themes
    Themes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_args() {
        let args = CliArgs::try_parse_from(["gridcell", "replay", "grid.yaml", "--json"]).unwrap();
        match args.command {
            Command::Replay {
                path,
                json,
                config,
                theme,
            } => {
                assert_eq!(path, PathBuf::from("grid.yaml"));
                assert!(json);
                assert!(config.is_none());
                assert!(theme.is_none());
            }
            Command::Themes => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_requires_path() {
        assert!(CliArgs::try_parse_from(["gridcell", "replay"]).is_err());
    }

    #[test]
    fn test_verbose_counts_after_subcommand() {
        let args = CliArgs::try_parse_from(["gridcell", "replay", "grid.yaml", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        let quiet = CliArgs::try_parse_from(["gridcell", "themes"]).unwrap();
        assert_eq!(quiet.verbose, 0);
    }

    #[test]
    fn test_themes_subcommand() {
        let args = CliArgs::try_parse_from(["gridcell", "themes"]).unwrap();
        assert!(matches!(args.command, Command::Themes));
    }
}
