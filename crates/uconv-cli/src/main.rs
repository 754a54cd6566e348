//! # Uconv CLI
//!
//! Command-line unit converter for mass, temperature and length.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults; it owns the fallback log path).
//! 3. Initialise the tracing subscriber (stderr diagnostics + the
//!    append-only conversion log file).
//! 4. Dispatch the conversion and render the outcome.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                                |
//! |------|--------------------------------------------------------|
//! |  0   | Success — including a reported conversion failure      |
//! |  1   | Internal / system error (logging setup, stdout I/O)    |
//! |  2   | Argument-parse failure                                 |
//!
//! An unknown unit is a reported outcome, not a fatal condition: the fixed
//! error message goes to stdout, the error record goes to the log, and the
//! process exits 0.

use std::io::{self, Write as _};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use uconv_core::prelude::*;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::from(1);
        }
    };
    let log_path = config.resolve_log_path(cli.log.as_ref());

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    // Before any conversion runs: the core logs each attempt as part of
    // the call, and those records must reach the file.
    if let Err(e) = init_logging(&cli.global, &log_path) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        value = cli.value,
        from = %cli.from,
        to = %cli.to,
        log_file = %log_path.display(),
        "CLI started"
    );

    // ── 4. Convert + render ───────────────────────────────────────────────
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e),
    }
}

/// Dispatch the conversion and render its outcome.
///
/// Both outcomes return `Ok`: a failed conversion is reported to stdout
/// with the fixed message (the core already wrote the error record) and
/// the process exits normally. Only shell failures bubble up as errors.
fn run(cli: &Cli) -> CliResult<()> {
    let service = ConversionService::new();
    let mut stdout = io::stdout().lock();

    match service.dispatch(cli.value, &cli.from, &cli.to) {
        Ok(result) => {
            writeln!(stdout, "{} {} = {} {}", cli.value, cli.from, result, cli.to)?;
        }
        Err(err) => {
            writeln!(stdout, "Ошибка: Неверные единицы измерения.")?;
            if !cli.global.quiet {
                for line in err.suggestions() {
                    eprintln!("{line}");
                }
            }
        }
    }
    Ok(())
}

/// Translate a `CliError` into a stderr message and an OS exit code.
fn handle_error(err: CliError) -> ExitCode {
    err.log();
    eprint!("{}", err.format_plain());
    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_parses_negative_values() {
        let cli = Cli::try_parse_from(["uconv", "-40", "--from", "Цельсий", "--to", "Фаренгейт"])
            .unwrap();
        assert_eq!(cli.value, -40.0);
    }

    #[test]
    fn cli_rejects_non_numeric_value() {
        assert!(Cli::try_parse_from(["uconv", "abc", "--from", "граммы", "--to", "унции"]).is_err());
    }

    #[test]
    fn cli_requires_both_units() {
        assert!(Cli::try_parse_from(["uconv", "1", "--from", "граммы"]).is_err());
        assert!(Cli::try_parse_from(["uconv", "1", "--to", "граммы"]).is_err());
    }
}
