//! Context classification for numeral tokens
//!
//! Decides whether a numeral sits in a protected context (date, clock time,
//! pH value, year before "waren"/"gab") and which unit accompanies it.

use crate::character_window::ContextWindow;
use crate::error::RuleResult;
use crate::rules::{
    compile,
    config::{ContextConfig, IgnoreConfig, UnitConfig},
};
use crate::types::{UnitHint, UnitKind};
use regex::Regex;

/// Classifier built from the rule set's context, ignore and unit sections
#[derive(Debug, Clone)]
pub struct ContextClassifier {
    ignore_patterns: Vec<Regex>,
    /// Keyword → unit, for keywords that are part of the token
    keywords: Vec<(String, UnitKind)>,
    /// Keywords that may also be inferred from the lookahead
    context_keywords: Vec<(String, UnitKind)>,
    ignore_window: usize,
    unit_lookahead: usize,
    year_marker: String,
    year_lookbehind: usize,
}

impl ContextClassifier {
    /// Compile ignore patterns and collect unit keywords
    pub fn new(
        context: &ContextConfig,
        ignore: &IgnoreConfig,
        units: &[UnitConfig],
    ) -> RuleResult<Self> {
        let ignore_patterns = ignore
            .patterns
            .iter()
            .map(|p| compile(p))
            .collect::<RuleResult<Vec<_>>>()?;

        let mut keywords = Vec::new();
        let mut context_keywords = Vec::new();
        for unit in units {
            for keyword in &unit.keywords {
                keywords.push((keyword.clone(), unit.kind));
                if unit.from_context {
                    context_keywords.push((keyword.clone(), unit.kind));
                }
            }
        }

        Ok(Self {
            ignore_patterns,
            keywords,
            context_keywords,
            ignore_window: context.ignore_window,
            unit_lookahead: context.unit_lookahead,
            year_marker: context.year_marker.clone(),
            year_lookbehind: context.year_lookbehind,
        })
    }

    /// Whether the numeral at `pos` is inside a protected context
    pub fn should_ignore(&self, text: &str, pos: usize) -> bool {
        let window = ContextWindow::around(text, pos, self.ignore_window, self.ignore_window);
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.is_match(window.as_str()))
    }

    /// Whether the numeral at `pos` directly follows the year marker ("Jahr 2024")
    pub fn is_year_reference(&self, text: &str, pos: usize) -> bool {
        !self.year_marker.is_empty()
            && ContextWindow::before(text, pos, self.year_lookbehind).contains(&self.year_marker)
    }

    /// Unit for the token starting at `start`
    ///
    /// A keyword that is part of the match always wins. Otherwise the
    /// earliest context-eligible keyword in the lookahead is used.
    pub fn classify_unit(&self, text: &str, start: usize, keyword: Option<&str>) -> UnitHint {
        if let Some(keyword) = keyword {
            if let Some((_, kind)) = self.keywords.iter().find(|(k, _)| k == keyword) {
                return UnitHint::from_token(*kind, keyword);
            }
        }

        let window = ContextWindow::after(text, start, self.unit_lookahead);
        self.context_keywords
            .iter()
            .filter_map(|(k, kind)| window.as_str().find(k.as_str()).map(|at| (at, k, *kind)))
            .min_by_key(|(at, _, _)| *at)
            .map_or_else(UnitHint::none, |(_, k, kind)| UnitHint::from_context(kind, k))
    }
}
