//! Core types for number simplification

use crate::number::ParsedNumber;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Unit category a rounding rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Euro amounts ("Euro", "€")
    Currency,
    /// Counts of people ("Menschen", "Teilnehmer", "Besucher")
    People,
    /// Weights ("Kilogramm", "kg")
    Weight,
    /// Counts of events ("Ereignisse")
    EventCount,
    /// Bare number without unit
    None,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Currency => "currency",
            UnitKind::People => "people",
            UnitKind::Weight => "weight",
            UnitKind::EventCount => "event_count",
            UnitKind::None => "none",
        };
        f.write_str(name)
    }
}

/// Where a unit keyword was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSource {
    /// Keyword is part of the matched token ("1.897 Menschen")
    Token,
    /// Keyword only appears in the lookahead window
    Context,
}

/// Unit detected for a token, with the keyword as it appeared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitHint {
    /// Unit category
    pub kind: UnitKind,
    /// Matched keyword ("Teilnehmer", "kg", ...)
    pub label: Option<String>,
    /// Where the keyword was found
    pub source: UnitSource,
}

impl UnitHint {
    /// Token without any unit keyword
    pub fn none() -> Self {
        Self {
            kind: UnitKind::None,
            label: None,
            source: UnitSource::Token,
        }
    }

    /// Unit taken from the token's own trailing keyword
    pub fn from_token(kind: UnitKind, label: &str) -> Self {
        Self {
            kind,
            label: Some(label.to_string()),
            source: UnitSource::Token,
        }
    }

    /// Unit inferred from the following context
    pub fn from_context(kind: UnitKind, label: &str) -> Self {
        Self {
            kind,
            label: Some(label.to_string()),
            source: UnitSource::Context,
        }
    }
}

/// A matched numeral together with its parsed value and unit
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken<'a> {
    /// Full matched text, including a trailing unit keyword
    pub raw: &'a str,
    /// Numeral part of the match ("1.897")
    pub numeral: &'a str,
    /// Byte offset of the match start in the scanned text
    pub start: usize,
    /// Byte offset of the match end in the scanned text
    pub end: usize,
    /// Parsed magnitude and sign
    pub number: ParsedNumber,
    /// Detected unit
    pub unit: UnitHint,
}

impl NumericToken<'_> {
    /// Absolute value used by every rounding rule
    pub fn magnitude(&self) -> f64 {
        self.number.value
    }

    /// Whether the numeral was written with a decimal comma
    pub fn has_fraction(&self) -> bool {
        crate::number::has_decimal_comma(self.numeral)
    }
}
