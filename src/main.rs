//! `paging-window` CLI entrypoint.
//!
//! Pages a JSON array of records using a URL-style query string, for example:
//!
//! ```text
//! paging-window --data-file fruits.json --query "?limit=2&page=1&range=price:100,300&sort=+price"
//! ```

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use paging_window::{NoopTelemetrySink, PagerConfig, StderrJsonlTelemetrySink, TelemetrySink};

use cli::CliError;
use cli::output::write_paging;
use cli::paging::run_paging;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = load_config()?;

    let telemetry: Box<dyn TelemetrySink> = if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    };

    let paging = run_paging(&config, telemetry.as_ref())?;
    write_paging(&paging)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CliError::Load`] when ortho-config fails to parse arguments or
/// load configuration files.
fn load_config() -> Result<PagerConfig, CliError> {
    PagerConfig::load().map_err(|error| CliError::Load {
        message: error.to_string(),
    })
}
