//! Unit-aware magnitude rounding
//!
//! Every rule works on the absolute value of a token. The first rule whose
//! unit, label, threshold and fraction requirement match renders the
//! replacement. A unit inferred from the lookahead that no row accepts is
//! retried as a bare number; other tokens no rule accepts keep their text.

use crate::character_window::ContextWindow;
use crate::error::{RuleError, RuleResult};
use crate::number;
use crate::rules::config::{EventCountConfig, FormatConfig, RoundingRuleConfig};
use crate::types::{NumericToken, UnitHint, UnitKind, UnitSource};
use std::collections::BTreeMap;

/// One row of the rounding table
#[derive(Debug, Clone)]
pub struct RoundingRule {
    unit: UnitKind,
    threshold: f64,
    exact: Option<f64>,
    divisor: f64,
    granularity: i32,
    requires_fraction: bool,
    from_context: bool,
    labels: Vec<String>,
    template: String,
    default_label: Option<String>,
    explanation: Option<String>,
}

impl RoundingRule {
    /// Resolve a configured row against the explanation texts
    pub fn from_config(
        config: &RoundingRuleConfig,
        explanations: &BTreeMap<String, String>,
    ) -> RuleResult<Self> {
        let explanation = match &config.explanation {
            Some(key) => Some(explanations.get(key).cloned().ok_or_else(|| {
                RuleError::Validation(format!("unknown explanation '{key}'"))
            })?),
            None => None,
        };

        Ok(Self {
            unit: config.unit,
            threshold: config.threshold,
            exact: config.exact,
            divisor: config.divisor,
            granularity: config.granularity,
            requires_fraction: config.requires_fraction,
            from_context: config.from_context,
            labels: config.labels.clone(),
            template: config.template.clone(),
            default_label: config.default_label.clone(),
            explanation,
        })
    }

    /// Whether this rule handles the token
    pub fn matches(&self, token: &NumericToken<'_>) -> bool {
        if token.unit.kind != self.unit {
            return false;
        }
        if token.unit.source == UnitSource::Context && !self.from_context {
            return false;
        }
        if !self.labels.is_empty()
            && !token
                .unit
                .label
                .as_ref()
                .is_some_and(|label| self.labels.contains(label))
        {
            return false;
        }
        if self.requires_fraction && !token.has_fraction() {
            return false;
        }

        let value = token.magnitude();
        match self.exact {
            Some(exact) => (value - exact).abs() < f64::EPSILON,
            None => value >= self.threshold,
        }
    }

    fn render(&self, token: &NumericToken<'_>, sign: &str) -> String {
        let value = number::format_rounded(token.magnitude() / self.divisor, self.granularity);

        // A keyword found only in the lookahead is not the token's own label
        let label = match token.unit.source {
            UnitSource::Token => token.unit.label.as_deref(),
            UnitSource::Context => None,
        }
        .or(self.default_label.as_deref())
        .unwrap_or_default();

        let mut rendered = self
            .template
            .replace("{sign}", sign)
            .replace("{value}", &value)
            .replace("{label}", label)
            .trim_end()
            .to_string();

        if let Some(explanation) = &self.explanation {
            rendered.push_str(" (");
            rendered.push_str(explanation);
            rendered.push(')');
        }
        rendered
    }
}

/// Fixed replacement for event counts
#[derive(Debug, Clone)]
pub struct EventCountRule {
    marker: String,
    lookbehind: usize,
    marked: String,
    default: String,
}

impl EventCountRule {
    /// Build from configuration
    pub fn from_config(config: &EventCountConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            lookbehind: config.lookbehind,
            marked: config.marked.clone(),
            default: config.default.clone(),
        }
    }

    /// Replacement for the event count at `pos`, ignoring its value
    pub fn render(&self, text: &str, pos: usize) -> String {
        if ContextWindow::before(text, pos, self.lookbehind).contains(&self.marker) {
            self.marked.clone()
        } else {
            self.default.clone()
        }
    }
}

/// Ordered rounding table plus the event-count literal
#[derive(Debug, Clone)]
pub struct RoundingEngine {
    rules: Vec<RoundingRule>,
    event_count: Option<EventCountRule>,
    approx_prefix: String,
    negative_sign: String,
}

impl RoundingEngine {
    /// Build the engine from its configured parts
    pub fn new(
        rules: Vec<RoundingRule>,
        event_count: Option<EventCountRule>,
        format: &FormatConfig,
    ) -> Self {
        Self {
            rules,
            event_count,
            approx_prefix: format.approx_prefix.clone(),
            negative_sign: format.negative_sign.clone(),
        }
    }

    /// Number of table rows
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sign prefix shared by all rules ("etwa " / "etwa -")
    fn sign_prefix(&self, token: &NumericToken<'_>) -> String {
        if token.number.is_negative {
            format!("{}{}", self.approx_prefix, self.negative_sign)
        } else {
            self.approx_prefix.clone()
        }
    }

    /// Replacement for `token`, or `None` to keep the original text
    ///
    /// `text` is the scanned text the token offsets refer to.
    pub fn render(&self, token: &NumericToken<'_>, text: &str) -> Option<String> {
        if token.unit.kind == UnitKind::EventCount && token.unit.source == UnitSource::Token {
            if let Some(rule) = &self.event_count {
                return Some(rule.render(text, token.start));
            }
        }

        let sign = self.sign_prefix(token);
        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(token)) {
            return Some(rule.render(token, &sign));
        }

        if token.unit.source != UnitSource::Context {
            return None;
        }
        let bare = NumericToken {
            unit: UnitHint::none(),
            ..token.clone()
        };
        self.rules
            .iter()
            .find(|rule| rule.matches(&bare))
            .map(|rule| rule.render(&bare, &sign))
    }
}
