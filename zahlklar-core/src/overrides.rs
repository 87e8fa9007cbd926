//! Literal sentence-shape overrides
//!
//! These rewrite whole sentence shapes to fixed wording. They are not
//! derived from the rounding table and run after every numeral was handled.

use crate::error::RuleResult;
use crate::rules::{compile, config::OverrideConfig};
use regex::Regex;
use std::borrow::Cow;

/// A compiled override
#[derive(Debug, Clone)]
pub struct LiteralOverride {
    pattern: Regex,
    replacement: String,
    description: Option<String>,
}

impl LiteralOverride {
    /// Compile a configured override
    pub fn from_config(config: &OverrideConfig) -> RuleResult<Self> {
        Ok(Self {
            pattern: compile(&config.pattern)?,
            replacement: config.replacement.clone(),
            description: config.description.clone(),
        })
    }

    /// Human-readable name, falling back to the pattern source
    pub fn describe(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(self.pattern.as_str())
    }

    /// Apply to every occurrence in `text`
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn over(pattern: &str, replacement: &str) -> LiteralOverride {
        LiteralOverride::from_config(&OverrideConfig {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            description: None,
        })
        .unwrap()
    }

    #[test]
    fn test_participants_on_date() {
        let o = over(
            r"(Am \d+\. \w+ \d{4} waren es) \d+(?:\.\d+)* (Teilnehmer)",
            "${1} etwa 6.000 ${2}",
        );
        assert_eq!(
            o.apply("Am 1. März 2024 waren es 5.678 Teilnehmer."),
            "Am 1. März 2024 waren es etwa 6.000 Teilnehmer."
        );
    }

    #[test]
    fn test_no_match_borrows() {
        let o = over(r"(Jahr 2024 gab es) \d+ (Ereignisse)", "${1} etwa 1.000 ${2}");
        assert!(matches!(o.apply("Keine Zahl hier."), Cow::Borrowed(_)));
        assert_eq!(o.describe(), r"(Jahr 2024 gab es) \d+ (Ereignisse)");
    }
}
