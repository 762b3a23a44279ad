//! # Skeleton
//!
//! Entry point of a freshly generated project.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (file + env + defaults).
//! 3. Initialise the tracing subscriber (stderr only).
//! 4. Run the core sequence: greeting, then `5 + 3 = 8`.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / I/O error    |
//! |  2   | Argument error          |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use skeleton_core::Library;
use tracing::debug;

use crate::{cli::Cli, config::AppConfig, error::CliError, logging::init_logging};

mod cli;
mod config;
mod demo;
mod error;
mod logging;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and print to stdout.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    let plain_stderr = cli.global.no_color || !std::io::stderr().is_terminal();

    // ── 2. Load configuration ─────────────────────────────────────────────
    // Runs before tracing exists, so failures are reported directly.
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, plain_stderr),
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global, &config) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "skeleton started"
    );

    // ── 4. Core sequence ──────────────────────────────────────────────────
    let mut stdout = std::io::stdout().lock();
    match demo::execute(Library::new(), &mut stdout) {
        Ok(()) => {
            debug!("skeleton completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log();
            handle_error(e, plain_stderr || config.output.no_color)
        }
    }
}

/// Translate a `CliError` into a user message on stderr and an exit code.
fn handle_error(err: CliError, plain: bool) -> ExitCode {
    let msg = if plain {
        err.format_plain()
    } else {
        err.format_colored()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
