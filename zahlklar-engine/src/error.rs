//! Engine error types

use thiserror::Error;
use zahlklar_core::RuleError;

/// Errors raised while setting up a simplifier
///
/// Rewriting text never fails; these only surface from construction.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rule set could not be loaded or compiled
    #[error("rule set error: {0}")]
    Rules(#[from] RuleError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
