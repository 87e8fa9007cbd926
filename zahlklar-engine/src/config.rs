//! Configuration types for the engine

use crate::pipeline::Stage;

/// Engine configuration
///
/// Each switch enables one pipeline stage. The order in which enabled
/// stages run is fixed by [`Stage::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Replace percentages with descriptive phrases
    pub percentages: bool,
    /// Round remaining numerals
    pub numbers: bool,
    /// Apply literal sentence overrides
    pub overrides: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            percentages: true,
            numbers: true,
            overrides: true,
        }
    }
}

impl EngineConfig {
    /// Only the percentage stage
    pub fn percentages_only() -> Self {
        Self {
            percentages: true,
            numbers: false,
            overrides: false,
        }
    }

    /// Rounding without percentage phrases or literal overrides
    pub fn numbers_only() -> Self {
        Self {
            percentages: false,
            numbers: true,
            overrides: false,
        }
    }

    /// Whether `stage` runs
    pub fn is_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::Percentages => self.percentages,
            Stage::Numbers => self.numbers,
            Stage::Overrides => self.overrides,
        }
    }
}
