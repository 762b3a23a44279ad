//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No behaviour lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "skeleton",
    bin_name = "skeleton",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greets and adds two numbers",
    long_about = "Skeleton is the entry point of a freshly generated project. \
                  It prints a greeting and the sum 5 + 3 to prove the \
                  workspace compiles, links and runs.",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_parse() {
        let cli = Cli::try_parse_from(["skeleton"]).unwrap();
        assert_eq!(cli.global.verbose, 0);
        assert!(!cli.global.quiet);
        assert!(cli.global.config.is_none());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["skeleton", "-vv"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["skeleton", "-q", "-v"]).is_err());
    }

    #[test]
    fn no_color_flag_sets_field() {
        let cli = Cli::try_parse_from(["skeleton", "--no-color"]).unwrap();
        assert!(cli.global.no_color);
    }

    #[test]
    fn positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["skeleton", "extra"]).is_err());
    }
}
