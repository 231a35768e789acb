//! CLI error handling

use std::fmt;

use jmxbeat_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration, path or I/O error from the library crates
    App(jmxbeat_errors::Error),
    /// Failure while writing output
    Io(std::io::Error),
}

impl CliError {
    /// Stable error code, if any
    pub fn code(&self) -> Option<&'static str> {
        match self {
            CliError::App(e) => e.user_code(),
            CliError::Io(_) => Some("error.io"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::App(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                if e.is_retryable() {
                    write!(f, "\n  Retry: safe to retry this operation.")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::App(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<jmxbeat_errors::Error> for CliError {
    fn from(e: jmxbeat_errors::Error) -> Self {
        CliError::App(e)
    }
}

impl From<jmxbeat_errors::PathError> for CliError {
    fn from(e: jmxbeat_errors::PathError) -> Self {
        CliError::App(e.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
