//! Tracing subscriber initialisation.
//!
//! Only the binary calls [`init_logging`]; `skeleton-core` only *emits*
//! events. Everything goes to stderr so that stdout carries nothing but the
//! greeting and the sum.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level                        |
//! |----------|-------------------------------------|
//! | (none)   | `logging.level` from config, or WARN |
//! | `-v`     | INFO                                |
//! | `-vv`    | DEBUG                               |
//! | `-vvv`   | TRACE                               |
//! | `--quiet`| ERROR                               |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let level = derive_level(args, config);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("skeleton={level},skeleton_core={level}")))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{level}': {e}"))?;

    let use_ansi = !(args.no_color || config.output.no_color) && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter, quiet flag and configured default to a
/// level string.
fn derive_level<'a>(args: &GlobalArgs, config: &'a AppConfig) -> &'a str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => config.logging.level.as_deref().unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
