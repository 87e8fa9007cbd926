//! Numeral scanning
//!
//! Finds German numerals ("-1.234,5") with an optional trailing unit keyword
//! ("1.897 Menschen", "1.234.567,89€"). Matches never overlap and are
//! yielded left to right.

use crate::error::RuleResult;
use crate::rules::{compile, config::UnitConfig};
use regex::Regex;

const NUMERAL: &str = r"-?[0-9]+(?:\.[0-9]+)*(?:,[0-9]+)?";

/// A raw numeral match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMatch<'t> {
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset of the match end
    pub end: usize,
    /// Full matched text
    pub text: &'t str,
    /// Numeral part, including a leading `-`
    pub numeral: &'t str,
    /// Unit keyword that directly follows the numeral
    pub unit_keyword: Option<&'t str>,
}

/// Compiled numeral pattern
#[derive(Debug, Clone)]
pub struct NumberScanner {
    pattern: Regex,
}

impl NumberScanner {
    /// Build the pattern from the configured unit keywords
    pub fn from_units(units: &[UnitConfig]) -> RuleResult<Self> {
        let mut keywords: Vec<&str> = units
            .iter()
            .flat_map(|u| u.keywords.iter().map(String::as_str))
            .collect();
        // Longest first so alternation prefers "Kilogramm" over a shorter prefix
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        keywords.dedup();

        let (words, symbols): (Vec<&str>, Vec<&str>) = keywords
            .into_iter()
            .partition(|k| k.chars().all(char::is_alphanumeric));

        let mut alternatives = Vec::new();
        if !words.is_empty() {
            let words: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
            alternatives.push(format!(r"(?:{})\b", words.join("|")));
        }
        alternatives.extend(symbols.iter().map(|s| regex::escape(s)));

        let pattern = if alternatives.is_empty() {
            format!("(?P<num>{NUMERAL})")
        } else {
            format!(
                r"(?P<num>{NUMERAL})(?:\s*(?P<unit>{}))?",
                alternatives.join("|")
            )
        };

        Ok(Self {
            pattern: compile(&pattern)?,
        })
    }

    /// Iterate over all numerals in `text`
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = NumberMatch<'a>> + 'a {
        self.pattern.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            let numeral = caps.name("num")?;
            Some(NumberMatch {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str(),
                numeral: numeral.as_str(),
                unit_keyword: caps.name("unit").map(|m| m.as_str()),
            })
        })
    }
}
