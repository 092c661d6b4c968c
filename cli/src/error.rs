//! Error types for tienda-cli.
//!
//! Keeps terminal output readable: SDK errors surface their message without
//! nesting, and an expired session tells the user what to run next.

use std::fmt;

use tienda_link::TiendaLinkError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CliError {
    /// Error from the tienda-link library
    Link(TiendaLinkError),

    /// Configuration file error
    Configuration(String),

    /// File I/O error
    File(String),

    /// Invalid command input (bad item spec, unknown role, ...)
    Parse(String),

    /// Output formatting error
    Format(String),
}

impl CliError {
    fn format_link_error(err: &TiendaLinkError) -> String {
        match err {
            TiendaLinkError::SessionExpired(msg) => {
                format!("Session expired ({}). Run `tienda login` to sign in again.", msg)
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Link(e) => write!(f, "{}", Self::format_link_error(e)),
            CliError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            CliError::File(msg) => write!(f, "File error: {}", msg),
            CliError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CliError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<TiendaLinkError> for CliError {
    fn from(err: TiendaLinkError) -> Self {
        CliError::Link(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::File(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Configuration(format!("TOML parse error: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::Parse("bad item spec".into());
        assert_eq!(err.to_string(), "Parse error: bad item spec");

        let err = CliError::Link(TiendaLinkError::Api {
            message: "Failed to fetch products".into(),
        });
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[test]
    fn test_session_expired_adds_login_hint() {
        let err = CliError::Link(TiendaLinkError::SessionExpired("no refresh token".into()));
        assert!(err.to_string().contains("tienda login"));
    }
}
