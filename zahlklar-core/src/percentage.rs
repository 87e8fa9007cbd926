//! Percentage-to-phrase table
//!
//! "25 Prozent" becomes "jeder Vierte", "95 Prozent" becomes "fast alle".
//! Lookup order: the area override ("30 Prozent der Fläche"), the exact
//! table on the truncated value, the ordered ranges, and finally the
//! original numeral followed by the keyword.

use crate::error::RuleResult;
use crate::number;
use crate::rules::{
    compile,
    config::{AreaOverride, PercentageConfig, PercentageRange},
};
use regex::Regex;
use std::collections::BTreeMap;

/// A percentage expression found in text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageMatch<'t> {
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset of the match end
    pub end: usize,
    /// Numeral as written ("4,57")
    pub numeral: &'t str,
    /// Area suffix including its leading whitespace (" der Fläche")
    pub suffix: Option<&'t str>,
}

#[derive(Debug, Clone)]
enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

#[derive(Debug, Clone)]
struct RangeRule {
    bound: Bound,
    phrase: String,
}

impl RangeRule {
    fn from_config(range: &PercentageRange) -> Self {
        let bound = match (range.at_least, range.at_most) {
            (Some(min), _) => Bound::AtLeast(min),
            (None, Some(max)) => Bound::AtMost(max),
            // validated: exactly one bound is present
            (None, None) => Bound::AtMost(f64::NEG_INFINITY),
        };
        Self {
            bound,
            phrase: range.phrase.clone(),
        }
    }

    fn matches(&self, value: f64) -> bool {
        match self.bound {
            Bound::AtLeast(min) => value >= min,
            Bound::AtMost(max) => value <= max,
        }
    }
}

/// Compiled percentage rules
#[derive(Debug, Clone)]
pub struct PercentageTable {
    pattern: Regex,
    keyword: String,
    area: Option<AreaOverride>,
    exact: BTreeMap<u32, String>,
    ranges: Vec<RangeRule>,
}

impl PercentageTable {
    /// Build the table and its match pattern
    pub fn from_config(config: &PercentageConfig) -> RuleResult<Self> {
        let mut pattern = format!(
            r"([0-9]+(?:,[0-9]+)?)\s*{}\b",
            regex::escape(&config.keyword)
        );
        if let Some(area) = &config.area {
            let words: Vec<String> = area
                .suffix
                .split_whitespace()
                .map(regex::escape)
                .collect();
            pattern.push_str(&format!(r"(\s+{}\b)?", words.join(r"\s+")));
        }

        Ok(Self {
            pattern: compile(&pattern)?,
            keyword: config.keyword.clone(),
            area: config.area.clone(),
            exact: config
                .exact
                .iter()
                .map(|e| (e.value, e.phrase.clone()))
                .collect(),
            ranges: config.ranges.iter().map(RangeRule::from_config).collect(),
        })
    }

    /// Iterate over percentage expressions in `text`
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PercentageMatch<'a>> + 'a {
        self.pattern.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(PercentageMatch {
                start: whole.start(),
                end: whole.end(),
                numeral: caps.get(1)?.as_str(),
                suffix: caps.get(2).map(|m| m.as_str()),
            })
        })
    }

    /// Descriptive phrase for a percentage numeral
    pub fn describe(&self, numeral: &str) -> String {
        let fallback = || format!("{numeral} {}", self.keyword);

        let value = match number::parse(numeral) {
            Ok(parsed) => parsed.value,
            Err(e) => {
                log::warn!("keeping percentage as written: {e}");
                return fallback();
            }
        };

        if value <= f64::from(u32::MAX) {
            if let Some(phrase) = self.exact.get(&(value.trunc() as u32)) {
                return phrase.clone();
            }
        }

        self.ranges
            .iter()
            .find(|range| range.matches(value))
            .map_or_else(fallback, |range| range.phrase.clone())
    }

    /// Replacement text for a whole match
    ///
    /// The area override only fires for its exact numeral; otherwise the
    /// suffix is kept after the phrase.
    pub fn replacement(&self, m: &PercentageMatch<'_>) -> String {
        if let (Some(area), Some(_)) = (&self.area, m.suffix) {
            if m.numeral == area.numeral {
                return area.phrase.clone();
            }
        }

        let mut phrase = self.describe(m.numeral);
        if let Some(suffix) = m.suffix {
            phrase.push_str(suffix);
        }
        phrase
    }
}
