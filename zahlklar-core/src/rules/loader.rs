//! Embedded rule set loader
//!
//! The German rules ship inside the binary and are compiled on first use.

use super::runtime::RuleSet;
use crate::error::{RuleError, RuleResult};
use std::sync::{Arc, OnceLock};

const EMBEDDED_GERMAN: &str = include_str!("../../configs/rules/german.toml");

/// Compiled embedded rules, or the message of the first failure
static GERMAN: OnceLock<Result<Arc<RuleSet>, String>> = OnceLock::new();

/// Shared German rule set
pub fn german() -> RuleResult<Arc<RuleSet>> {
    GERMAN
        .get_or_init(|| {
            RuleSet::from_toml_str(EMBEDDED_GERMAN)
                .map(Arc::new)
                .map_err(|e| format!("embedded German rules: {e}"))
        })
        .clone()
        .map_err(RuleError::Validation)
}

/// TOML source of the embedded German rules
pub fn embedded_source() -> &'static str {
    EMBEDDED_GERMAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_rules_load() {
        let rules = german().unwrap();
        assert_eq!(rules.code(), "de");
        assert_eq!(rules.name(), "Deutsch");
        assert_eq!(rules.rounding().rule_count(), 9);
        assert_eq!(rules.overrides().len(), 3);
    }

    #[test]
    fn test_rules_are_shared() {
        let a = german().unwrap();
        let b = german().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_embedded_source_round_trips() {
        let rules = RuleSet::from_toml_str(embedded_source()).unwrap();
        assert_eq!(rules.code(), "de");
    }
}
