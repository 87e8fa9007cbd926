//! Building blocks for simplifying numbers in German text
//!
//! This crate holds everything the rewrite pipeline needs to decide what a
//! numeral should become, without owning the pipeline itself:
//!
//! - **Parsing**: German numerals ("1.234,5") to values and back to grouped,
//!   rounded text
//! - **Context**: protected spans (dates, clock times, pH values), year
//!   references and unit detection around a token
//! - **Rules**: percentage phrases, the unit-aware rounding table and the
//!   literal sentence overrides, all loaded from a TOML rule file
//!
//! # Example
//!
//! ```rust
//! use zahlklar_core::rules;
//!
//! let rules = rules::german().unwrap();
//! let table = rules.percentages();
//! assert_eq!(table.describe("25"), "jeder Vierte");
//! assert_eq!(table.describe("95"), "fast alle");
//! ```

pub mod character_window;
pub mod context;
pub mod error;
pub mod number;
pub mod overrides;
pub mod percentage;
pub mod rounding;
pub mod rules;
pub mod scanner;
pub mod types;

pub use character_window::ContextWindow;
pub use context::ContextClassifier;
pub use error::{ParseError, ParseResult, RuleError, RuleResult};
pub use number::ParsedNumber;
pub use overrides::LiteralOverride;
pub use percentage::{PercentageMatch, PercentageTable};
pub use rounding::{EventCountRule, RoundingEngine, RoundingRule};
pub use rules::{RuleConfig, RuleSet};
pub use scanner::{NumberMatch, NumberScanner};
pub use types::{NumericToken, UnitHint, UnitKind, UnitSource};
