//! Global arguments accepted by the binary.
//!
//! Every flag is optional; a bare `skeleton` invocation is the normal case.
//! None of them change what the core sequence writes to stdout.

use clap::Args;
use std::path::PathBuf;

/// Global arguments.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity (written to stderr):
    (none)  - Warnings and errors
    -v      - Info level
    -vv     - Debug level (one event per library call)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Suppress all diagnostics except errors.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set to any non-empty value
    /// (see <https://no-color.org>); `0`, `false`, `no` and `off` leave
    /// colour on.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}
