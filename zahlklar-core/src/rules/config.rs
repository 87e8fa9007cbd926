//! Configuration structures and validation
//!
//! This module defines the TOML schema for rule files.

use crate::types::UnitKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub format: FormatConfig,
    pub units: Vec<UnitConfig>,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub ignore: IgnoreConfig,
    pub percentages: PercentageConfig,
    #[serde(default)]
    pub explanations: BTreeMap<String, String>,
    #[serde(default)]
    pub rounding: Vec<RoundingRuleConfig>,
    pub event_count: Option<EventCountConfig>,
    #[serde(default)]
    pub overrides: Vec<OverrideConfig>,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Output wording shared by every rounding rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub approx_prefix: String,
    pub negative_sign: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            approx_prefix: "etwa ".to_string(),
            negative_sign: "-".to_string(),
        }
    }
}

/// Keywords for one unit category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    pub kind: UnitKind,
    pub keywords: Vec<String>,
    /// Keywords may also be found in the lookahead after a bare numeral
    #[serde(default)]
    pub from_context: bool,
}

/// Window sizes (in characters) for context predicates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub ignore_window: usize,
    pub unit_lookahead: usize,
    pub year_marker: String,
    pub year_lookbehind: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            ignore_window: 20,
            unit_lookahead: 50,
            year_marker: "Jahr".to_string(),
            year_lookbehind: 5,
        }
    }
}

/// Protected contexts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Percentage phrase table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageConfig {
    pub keyword: String,
    pub area: Option<AreaOverride>,
    #[serde(default)]
    pub exact: Vec<ExactPercentage>,
    #[serde(default)]
    pub ranges: Vec<PercentageRange>,
}

/// Compound phrase for "<numeral> Prozent <suffix>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaOverride {
    pub suffix: String,
    pub numeral: String,
    pub phrase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExactPercentage {
    pub value: u32,
    pub phrase: String,
}

/// Open-ended range; exactly one bound must be set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageRange {
    pub at_least: Option<f64>,
    pub at_most: Option<f64>,
    pub phrase: String,
}

/// One row of the rounding table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundingRuleConfig {
    pub unit: UnitKind,
    #[serde(default)]
    pub threshold: f64,
    pub exact: Option<f64>,
    #[serde(default = "default_divisor")]
    pub divisor: f64,
    pub granularity: i32,
    #[serde(default)]
    pub requires_fraction: bool,
    #[serde(default)]
    pub from_context: bool,
    /// Keywords the row accepts; empty accepts any label of the unit
    #[serde(default)]
    pub labels: Vec<String>,
    pub template: String,
    pub default_label: Option<String>,
    pub explanation: Option<String>,
}

/// Fixed replacement text for event counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCountConfig {
    pub marker: String,
    pub lookbehind: usize,
    pub marked: String,
    pub default: String,
}

/// Literal sentence-shape rewrite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideConfig {
    pub pattern: String,
    pub replacement: String,
    pub description: Option<String>,
}

fn default_divisor() -> f64 {
    1.0
}

impl RuleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Rule set code must not be empty".to_string());
        }

        if self.percentages.keyword.trim().is_empty() {
            return Err("Percentage keyword must not be empty".to_string());
        }

        for unit in &self.units {
            if unit.kind == UnitKind::None {
                return Err("Unit kind 'none' cannot have keywords".to_string());
            }
            if unit.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("Empty keyword for unit '{}'", unit.kind));
            }
        }

        for range in &self.percentages.ranges {
            if range.at_least.is_some() == range.at_most.is_some() {
                return Err(format!(
                    "Percentage range '{}' needs exactly one of at_least/at_most",
                    range.phrase
                ));
            }
        }

        for (i, rule) in self.rounding.iter().enumerate() {
            if rule.template.trim().is_empty() {
                return Err(format!("Rounding rule {i} has an empty template"));
            }
            if !(rule.divisor > 0.0) {
                return Err(format!("Rounding rule {i} needs a positive divisor"));
            }
            if !(-6..=9).contains(&rule.granularity) {
                return Err(format!(
                    "Rounding rule {i} granularity {} out of range (-6..=9)",
                    rule.granularity
                ));
            }
            if let Some(key) = &rule.explanation {
                if !self.explanations.contains_key(key) {
                    return Err(format!("Rounding rule {i} references unknown explanation '{key}'"));
                }
            }
        }

        Ok(())
    }
}
