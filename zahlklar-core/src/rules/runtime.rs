//! Compiled rule set
//!
//! Bridges the TOML configuration and the components used on the hot path.

use super::config::RuleConfig;
use crate::context::ContextClassifier;
use crate::error::{RuleError, RuleResult};
use crate::overrides::LiteralOverride;
use crate::percentage::PercentageTable;
use crate::rounding::{EventCountRule, RoundingEngine, RoundingRule};
use crate::scanner::NumberScanner;
use std::path::Path;

/// Immutable, compiled rule set
#[derive(Debug, Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    scanner: NumberScanner,
    classifier: ContextClassifier,
    percentages: PercentageTable,
    rounding: RoundingEngine,
    overrides: Vec<LiteralOverride>,
}

impl RuleSet {
    /// Create from configuration
    pub fn from_config(config: &RuleConfig) -> RuleResult<Self> {
        config.validate().map_err(RuleError::Validation)?;

        let scanner = NumberScanner::from_units(&config.units)?;
        let classifier = ContextClassifier::new(&config.context, &config.ignore, &config.units)?;
        let percentages = PercentageTable::from_config(&config.percentages)?;

        let rules = config
            .rounding
            .iter()
            .map(|row| RoundingRule::from_config(row, &config.explanations))
            .collect::<RuleResult<Vec<_>>>()?;
        let event_count = config.event_count.as_ref().map(EventCountRule::from_config);
        let rounding = RoundingEngine::new(rules, event_count, &config.format);

        let overrides = config
            .overrides
            .iter()
            .map(LiteralOverride::from_config)
            .collect::<RuleResult<Vec<_>>>()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            scanner,
            classifier,
            percentages,
            rounding,
            overrides,
        })
    }

    /// Parse and compile a TOML rule file's contents
    pub fn from_toml_str(source: &str) -> RuleResult<Self> {
        let config: RuleConfig = toml::from_str(source)?;
        Self::from_config(&config)
    }

    /// Load a rule file from disk
    pub fn from_file(path: &Path) -> RuleResult<Self> {
        let source = std::fs::read_to_string(path)?;
        log::debug!("loading rule file {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Rule set code ("de")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeral scanner for the general stage
    pub fn scanner(&self) -> &NumberScanner {
        &self.scanner
    }

    /// Protected-context and unit classifier
    pub fn classifier(&self) -> &ContextClassifier {
        &self.classifier
    }

    /// Percentage phrase table
    pub fn percentages(&self) -> &PercentageTable {
        &self.percentages
    }

    /// Rounding table
    pub fn rounding(&self) -> &RoundingEngine {
        &self.rounding
    }

    /// Literal overrides in application order
    pub fn overrides(&self) -> &[LiteralOverride] {
        &self.overrides
    }
}
