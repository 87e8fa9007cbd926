//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    NoFilesMatched(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Rule file failed to load or validate
    InvalidRules(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesMatched(patterns) => {
                write!(f, "No files found matching: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidRules(msg) => write!(f, "Invalid rule file: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
