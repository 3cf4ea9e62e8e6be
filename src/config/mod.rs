//! Application configuration loaded from CLI, environment, and files.
//!
//! The `paging-window` tool merges values from command-line arguments,
//! environment variables, and configuration files using ortho-config's
//! layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.paging-window.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `PAGING_WINDOW_DATA_FILE`,
//!    `PAGING_WINDOW_QUERY`, `PAGING_WINDOW_LIMIT`, ...
//! 4. **Command-line arguments** – `--data-file`/`-f`, `--query`/`-q`, ...
//!
//! Explicit `limit`, `page` and `sort` values override the matching
//! parameters of `query`.
//!
//! # Configuration File
//!
//! ```toml
//! data_file = "fruits.json"
//! query = "?limit=2&page=1&range=price:100,300"
//! sort = "-price"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::memory::FieldRange;
use crate::query::{Query, parse_orders, parse_query, parse_range};

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No data file was configured.
    #[error("data file is required (use --data-file or -f)")]
    MissingDataFile,

    /// A configured value is unusable.
    #[error("configuration error: {message}")]
    Invalid {
        /// Description of the rejected value.
        message: String,
    },
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use paging_window::PagerConfig;
///
/// let config = PagerConfig::load().expect("failed to load configuration");
/// let query = config.resolve_query();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PAGING_WINDOW",
    discovery(
        dotfile_name = ".paging-window.toml",
        config_file_name = "paging-window.toml",
        app_name = "paging-window"
    )
)]
pub struct PagerConfig {
    /// Path to a JSON file holding an array of records.
    ///
    /// Can be provided via:
    /// - CLI: `--data-file <PATH>` or `-f <PATH>`
    /// - Environment: `PAGING_WINDOW_DATA_FILE`
    /// - Config file: `data_file = "..."`
    #[ortho_config(cli_short = 'f')]
    pub data_file: Option<String>,

    /// URL or query string carrying `limit`, `page`, `sort` and `range`.
    ///
    /// Can be provided via:
    /// - CLI: `--query <QUERY>` or `-q <QUERY>`
    /// - Environment: `PAGING_WINDOW_QUERY`
    /// - Config file: `query = "?limit=2&page=1"`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Records per page; overrides `limit` in `query`.
    #[ortho_config(cli_short = 'l')]
    pub limit: Option<usize>,

    /// Requested page; overrides `page` in `query`.
    #[ortho_config(cli_short = 'p')]
    pub page: Option<i64>,

    /// Sort expression such as `-price+name`; overrides `sort` in `query`.
    #[ortho_config(cli_short = 's')]
    pub sort: Option<String>,

    /// Emits a JSONL telemetry event on stderr after paging.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry` / `-T`
    /// - Config file: `telemetry = true`
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

impl PagerConfig {
    /// Returns the data file path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDataFile`] when no path is configured.
    pub fn require_data_file(&self) -> Result<&str, ConfigError> {
        self.data_file
            .as_deref()
            .ok_or(ConfigError::MissingDataFile)
    }

    /// Rejects values the pager cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `limit` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == Some(0) {
            return Err(ConfigError::Invalid {
                message: "limit must be at least 1".to_owned(),
            });
        }
        Ok(())
    }

    /// Builds the paging query from `query` and the explicit overrides.
    #[must_use]
    pub fn resolve_query(&self) -> Query {
        let mut query = self
            .query
            .as_deref()
            .map_or_else(Query::default, parse_query);

        if let Some(limit) = self.limit {
            query.limit = limit;
        }
        if let Some(page) = self.page {
            query.page = page;
        }
        if let Some(sort) = &self.sort {
            query.sort = parse_orders(sort);
        }

        query
    }

    /// Returns the record filter carried by `query`, if any.
    #[must_use]
    pub fn resolve_condition(&self) -> Option<FieldRange> {
        self.query.as_deref().and_then(parse_range)
    }
}

#[cfg(test)]
mod tests;
