//! SSH config error types
//!
//! Errors that can occur while parsing, querying, or rewriting an SSH config.

use thiserror::Error;

/// Errors that can occur during SSH config operations
#[derive(Error, Debug)]
pub enum SshConfigError {
    /// A Host block has no HostName directive
    #[error("HostName not found in host block for '{0}'")]
    MissingHostName(String),

    /// A block was expected to start with a `Host <value>` line
    #[error("Expected 'Host' line, got: {0}")]
    MalformedHost(String),

    /// No Host block carries the requested name
    #[error("Host '{0}' not found")]
    HostNotFound(String),

    /// Failed to read an SSH config file
    #[error("Failed to read SSH config: {0}")]
    ReadFailed(String),

    /// Failed to write an SSH config file
    #[error("Failed to write SSH config: {0}")]
    WriteFailed(String),
}

impl SshConfigError {
    /// Whether the error came from the text itself rather than lookup or I/O
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::MissingHostName(_) | Self::MalformedHost(_))
    }
}
