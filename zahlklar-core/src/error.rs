//! Core error types
//!
//! Parse failures are deterministic and recovered at the token level; rule
//! errors only occur while a [`RuleSet`](crate::rules::RuleSet) is built.

use thiserror::Error;

/// A numeral that could not be converted to a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Cleaned numeral text is not a valid number
    #[error("invalid numeral: '{raw}'")]
    InvalidNumeral {
        /// The numeral as it appeared in the text
        raw: String,
    },
}

/// Errors raised while loading or compiling a rule set
#[derive(Error, Debug)]
pub enum RuleError {
    /// TOML could not be deserialised
    #[error("failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A pattern in the rule file does not compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Rule file is well-formed but semantically invalid
    #[error("invalid rule set: {0}")]
    Validation(String),

    /// Rule file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for number parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for rule loading
pub type RuleResult<T> = Result<T, RuleError>;
