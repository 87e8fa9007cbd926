//! Rule sets for number simplification
//!
//! A rule set bundles every table the rewrite pipeline consults: unit
//! keywords, protected contexts, percentage phrases, rounding rows and
//! literal overrides. It is loaded from TOML once and shared read-only.

pub mod config;
mod loader;
mod runtime;

pub use config::RuleConfig;
pub use loader::{embedded_source, german};
pub use runtime::RuleSet;

use crate::error::{RuleError, RuleResult};
use regex::Regex;

/// Compile a pattern, keeping its source in the error
pub(crate) fn compile(pattern: &str) -> RuleResult<Regex> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
