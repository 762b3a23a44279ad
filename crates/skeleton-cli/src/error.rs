//! Error handling for the Skeleton binary.
//!
//! The core sequence itself cannot fail; everything here covers the ambient
//! steps around it (configuration, writing to stdout). Each error carries:
//! - A user-facing message
//! - Actionable suggestions
//! - An exit code

use std::error::Error;
use std::iter;

use owo_colors::OwoColorize;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file or environment override could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An I/O operation failed (typically stdout closed or a broken pipe).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed with --config, or remove it to use defaults".into(),
                "Check SKELETON_* environment variables".into(),
            ],

            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Ensure standard output is open and writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    ///
    /// Argument errors exit with 2 straight from clap.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a terminal: red headline, dimmed causes, yellow hints.
    pub fn format_colored(&self) -> String {
        self.render(|text, part| match part {
            Part::Headline => text.red().bold().to_string(),
            Part::Cause => text.dimmed().to_string(),
            Part::Hint => text.yellow().to_string(),
        })
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self) -> String {
        self.render(|text, _| text.to_owned())
    }

    fn render(&self, paint: impl Fn(&str, Part) -> String) -> String {
        let mut out = format!("{}\n", paint(&format!("skeleton: {self}"), Part::Headline));
        for cause in iter::successors(self.source(), |&e: &&(dyn Error + 'static)| e.source()) {
            out.push_str(&format!("  caused by: {}\n", paint(&cause.to_string(), Part::Cause)));
        }
        for hint in self.suggestions() {
            out.push_str(&format!("  hint: {}\n", paint(&hint, Part::Hint)));
        }
        out
    }

    /// Emit one structured event for this error.
    pub fn log(&self) {
        tracing::error!(
            category = ?self.category(),
            exit_code = self.exit_code(),
            "{self}"
        );
    }
}

#[derive(Clone, Copy)]
enum Part {
    Headline,
    Cause,
    Hint,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `io::Result` into [`CliResult`] at call-sites
/// with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::Io {
            message: f().into(),
            source: e,
        })
    }
}
