//! Rewrite pipeline for simplifying numbers in German text
//!
//! Exact figures are replaced by approximate, easier phrasing: percentages
//! become descriptive phrases, large amounts are rounded and sometimes
//! explained, and dates, clock times or pH values stay as they are.
//!
//! ```rust
//! use zahlklar_engine::simplify_numbers;
//!
//! assert_eq!(
//!     simplify_numbers("1.897 Menschen nahmen teil."),
//!     "etwa 2.000 Menschen nahmen teil."
//! );
//! assert_eq!(simplify_numbers("90 Prozent stimmten zu."), "fast alle stimmten zu.");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod splicer;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use pipeline::{Pipeline, Stage};
pub use processor::{NumberSimplifier, NumberSimplifierBuilder};
pub use splicer::{Spliced, Splicer};

// Re-export from core for convenience
pub use zahlklar_core::{RuleError, RuleSet};

/// Simplify `text` with the built-in German rules
///
/// Never fails: if the rules cannot be loaded the text is returned as is.
pub fn simplify_numbers(text: &str) -> String {
    match zahlklar_core::rules::german() {
        Ok(rules) => Pipeline::new(&rules, EngineConfig::default()).run(text),
        Err(e) => {
            log::error!("built-in rules unavailable: {e}");
            text.to_string()
        }
    }
}
