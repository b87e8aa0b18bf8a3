//! Error types for the social shell.
//!
//! This module defines the centralized error type [`ShellError`] and a type alias
//! [`Result`] used throughout the crate. The shell's own state transitions are
//! total; errors only arise at the edges (collaborator lookups, file loading,
//! configuration parsing).

use thiserror::Error;

/// The main error type for shell operations.
///
/// # Examples
///
/// ```
/// use socialshell::ShellError;
///
/// fn lookup() -> Result<(), ShellError> {
///     Err(ShellError::Roster("chat backend unavailable".to_string()))
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShellError {
    /// A data file (roster, session payload) could not be decoded.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The chat roster collaborator failed to produce call members.
    #[error("Roster error: {0}")]
    Roster(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
