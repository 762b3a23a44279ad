//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup. It only tunes ambient behaviour
//! (log level, colour); the core crate never sees it, and nothing here can
//! change the greeting or the arithmetic.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SKELETON_` prefix, `__` between sections
//!    (`SKELETON_LOGGING__LEVEL=debug`)
//! 3. Config file: `--config FILE`, or the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "SKELETON";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Diagnostics settings.
    pub logging: LoggingConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when no `-v`/`-q` flag is given. `None` means `warn`.
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the file and environment layers.
    ///
    /// An explicitly named `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(|e| CliError::Config {
                message: format!("failed to load '{}'", path.display()),
                source: Some(Box::new(e)),
            })?
            .validated()
    }

    /// Reject values that would only fail later, once logging starts.
    fn validated(self) -> CliResult<Self> {
        if let Some(level) = self.logging.level.as_deref() {
            level.parse::<LevelFilter>().map_err(|e| CliError::Config {
                message: format!("invalid logging.level '{level}'"),
                source: Some(Box::new(e)),
            })?;
        }
        Ok(self)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.skeleton.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "skeleton", "skeleton")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".skeleton.toml"))
    }
}
