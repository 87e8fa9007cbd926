//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One simplified text and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simplified {
    /// File path, "text #N" or "stdin"
    pub source: String,
    /// Original text
    pub input: String,
    /// Simplified text
    pub output: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single result
    fn format_entry(&mut self, entry: &Simplified) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
