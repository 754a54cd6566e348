//! Error handling for the uconv CLI shell.
//!
//! Only *shell* failures live here — logging setup and stdout I/O. A failed
//! conversion is an expected outcome, not an error: it is reported on
//! stdout and the process exits normally, so no variant exists for it.

use std::error::Error;

use thiserror::Error;
use tracing::error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Shell-level CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {message}")]
    Logging { message: String },

    /// An I/O operation failed (writing the result line, usually).
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
    /// Exit code to pass to the OS. All shell errors are internal: 1.
    /// (User/parse errors exit 2 via clap before a `CliError` can exist.)
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Emit a structured log event for this error.
    pub fn log(&self) {
        error!("Internal error: {}", self);
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }

    /// Plain-text rendering for stderr — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = format!("Error: {self}\n");
        let mut src = self.source();
        while let Some(err) = src {
            out.push_str(&format!("  Caused by: {err}\n"));
            src = err.source();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn exit_code_is_internal() {
        let err = CliError::Logging {
            message: "x".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_with_source_chain() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let cli: CliResult<()> = result.map_err(CliError::from);
        let err = cli.unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.format_plain().contains("Caused by"));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Logging {
            message: "subscriber already set".into(),
        };
        let s = err.format_plain();
        assert!(s.contains("Error:"));
        assert!(s.contains("subscriber already set"));
    }
}
