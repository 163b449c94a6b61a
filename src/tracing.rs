//! Logging for the scenario runner
//!
//! Two sinks:
//! - stderr, filtered by `RUST_LOG` when set, otherwise by `-v` count
//!   (`warn`, `-v` info, `-vv` debug, `-vvv` trace)
//! - `<config dir>/logs/gridcell.log`, rotated daily, always at debug
//!
//! Useful targets: `gridcell::cell` (press routing, separator flips),
//! `gridcell::model` (mouse-over slot changes), `gridcell::scenario`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "gridcell.log";

/// Console level used when `RUST_LOG` is not set
pub fn console_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn console_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level(verbose)))
}

/// Install the global subscriber. Call once, before any replay work.
pub fn init(verbose: u8) {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter(verbose));

    let file = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry().with(console).with(file).init();
}
