//! Rewrite pipeline
//!
//! Percentages are replaced first, then every remaining numeral is rounded,
//! then the literal overrides run over the result. Each stage consumes the
//! previous stage's output; offsets always refer to the current stage input.

use crate::config::EngineConfig;
use crate::splicer::{Spliced, Splicer};
use std::borrow::Cow;
use std::ops::Range;
use zahlklar_core::{number, NumberMatch, NumericToken, RuleSet};

/// Named pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// "25 Prozent" → "jeder Vierte"
    Percentages,
    /// Unit-aware rounding of the remaining numerals
    Numbers,
    /// Literal sentence-shape rewrites
    Overrides,
}

impl Stage {
    /// Fixed execution order
    pub const ORDER: [Stage; 3] = [Stage::Percentages, Stage::Numbers, Stage::Overrides];

    /// Stage name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Percentages => "percentages",
            Stage::Numbers => "numbers",
            Stage::Overrides => "overrides",
        }
    }
}

/// Runs the enabled stages over a text
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'r> {
    rules: &'r RuleSet,
    config: EngineConfig,
}

impl<'r> Pipeline<'r> {
    /// Create a pipeline over a rule set
    pub fn new(rules: &'r RuleSet, config: EngineConfig) -> Self {
        Self { rules, config }
    }

    /// Run every enabled stage in order
    pub fn run(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut current = Spliced::plain(text);
        for stage in Stage::ORDER {
            if !self.config.is_enabled(stage) {
                continue;
            }
            current = self.apply(stage, &current);
        }
        current.text
    }

    /// Run a single stage
    pub fn apply(&self, stage: Stage, input: &Spliced) -> Spliced {
        let output = match stage {
            Stage::Percentages => self.percentages(&input.text),
            Stage::Numbers => self.numbers(input),
            Stage::Overrides => self.overrides(&input.text),
        };
        log::debug!(
            "stage {}: {} rewritten span(s)",
            stage.name(),
            output.protected.len()
        );
        output
    }

    fn percentages(&self, text: &str) -> Spliced {
        let table = self.rules.percentages();
        let mut splicer = Splicer::new(text);
        for m in table.find_iter(text) {
            let replacement = table.replacement(&m);
            log::debug!("percentage '{}' -> '{}'", &text[m.start..m.end], replacement);
            splicer.replace(m.start, m.end, &replacement);
        }
        splicer.finish()
    }

    fn numbers(&self, input: &Spliced) -> Spliced {
        let text = input.text.as_str();
        let mut splicer = Splicer::new(text);
        for m in self.rules.scanner().find_iter(text) {
            if input.is_protected(&(m.start..m.end)) {
                log::trace!("'{}' is inside rewritten text", m.text);
                continue;
            }
            if let Some((span, replacement)) = self.round(text, &m) {
                splicer.replace(span.start, span.end, &replacement);
            }
        }
        splicer.finish()
    }

    /// Replacement for one numeral match, with the byte span it covers
    fn round(&self, text: &str, m: &NumberMatch<'_>) -> Option<(Range<usize>, String)> {
        // "COVID-19", "2020-2021": the dash belongs to the word before it
        let is_hyphen = m.numeral.starts_with('-')
            && text[..m.start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let (start, numeral) = if is_hyphen {
            (m.start + 1, &m.numeral[1..])
        } else {
            (m.start, m.numeral)
        };

        let classifier = self.rules.classifier();
        if classifier.is_year_reference(text, start) {
            log::trace!("'{numeral}' is a year");
            return None;
        }
        if classifier.should_ignore(text, start) {
            log::trace!("'{numeral}' is in a protected context");
            return None;
        }

        let parsed = match number::parse(numeral) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("leaving numeral unchanged: {e}");
                return None;
            }
        };

        let token = NumericToken {
            raw: &text[start..m.end],
            numeral,
            start,
            end: m.end,
            number: parsed,
            unit: classifier.classify_unit(text, start, m.unit_keyword),
        };

        let replacement = self.rules.rounding().render(&token, text)?;
        log::debug!("number '{}' -> '{}'", token.raw, replacement);
        Some((token.start..token.end, replacement))
    }

    fn overrides(&self, text: &str) -> Spliced {
        let mut current = Cow::Borrowed(text);
        let mut protected = Vec::new();
        for rule in self.rules.overrides() {
            if let Cow::Owned(rewritten) = rule.apply(&current) {
                log::debug!("override '{}' applied", rule.describe());
                protected.push(0..rewritten.len());
                current = Cow::Owned(rewritten);
            }
        }
        Spliced {
            text: current.into_owned(),
            protected,
        }
    }
}
