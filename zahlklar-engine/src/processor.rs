//! Number simplifier and builder

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    pipeline::Pipeline,
};
use std::path::PathBuf;
use std::sync::Arc;
use zahlklar_core::{rules, RuleSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Replaces exact numbers in German text with approximate phrases
///
/// Holds an immutable rule set and can be shared across threads.
#[derive(Debug, Clone)]
pub struct NumberSimplifier {
    rules: Arc<RuleSet>,
    config: EngineConfig,
}

impl NumberSimplifier {
    /// Simplifier with the built-in German rules
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(rules::german()?))
    }

    /// Simplifier over a custom rule set
    pub fn with_rules(rules: Arc<RuleSet>) -> Self {
        Self {
            rules,
            config: EngineConfig::default(),
        }
    }

    /// Start building a simplifier
    pub fn builder() -> NumberSimplifierBuilder {
        NumberSimplifierBuilder::new()
    }

    /// Rule set in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Stage configuration
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Simplify one text
    pub fn simplify(&self, text: &str) -> String {
        Pipeline::new(&self.rules, self.config).run(text)
    }

    /// Simplify many texts, keeping their order
    pub fn simplify_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        log::info!("simplifying {} text(s)", texts.len());

        #[cfg(feature = "parallel")]
        let simplified: Vec<String> = texts.par_iter().map(|t| self.simplify(t.as_ref())).collect();

        #[cfg(not(feature = "parallel"))]
        let simplified: Vec<String> = texts.iter().map(|t| self.simplify(t.as_ref())).collect();

        simplified
    }
}

/// Builder for [`NumberSimplifier`]
#[derive(Debug, Default)]
pub struct NumberSimplifierBuilder {
    rules: Option<Arc<RuleSet>>,
    rules_file: Option<PathBuf>,
    config: EngineConfig,
}

impl NumberSimplifierBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already loaded rule set
    pub fn rules(mut self, rules: Arc<RuleSet>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Load the rule set from a TOML file when building
    pub fn rules_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Replace the whole stage configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable the percentage stage
    pub fn percentages(mut self, enabled: bool) -> Self {
        self.config.percentages = enabled;
        self
    }

    /// Enable or disable the number stage
    pub fn numbers(mut self, enabled: bool) -> Self {
        self.config.numbers = enabled;
        self
    }

    /// Enable or disable the override stage
    pub fn overrides(mut self, enabled: bool) -> Self {
        self.config.overrides = enabled;
        self
    }

    /// Build the simplifier
    pub fn build(self) -> Result<NumberSimplifier> {
        let rules = match (self.rules, self.rules_file) {
            (Some(_), Some(_)) => {
                return Err(EngineError::Config(
                    "rules and rules_file are mutually exclusive".to_string(),
                ))
            }
            (Some(rules), None) => rules,
            (None, Some(path)) => Arc::new(RuleSet::from_file(&path)?),
            (None, None) => rules::german()?,
        };

        log::debug!("using rule set '{}' ({})", rules.name(), rules.code());
        Ok(NumberSimplifier {
            rules,
            config: self.config,
        })
    }
}
