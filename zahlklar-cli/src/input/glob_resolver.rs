//! Expansion of file patterns

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Expand glob patterns into regular files, sorted and without duplicates
pub fn resolve_patterns(patterns: &[String]) -> CliResult<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let entries =
            glob::glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for entry in entries {
            let path = entry.with_context(|| format!("Cannot read match of {pattern}"))?;
            if path.is_file() {
                files.insert(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoFilesMatched(patterns.join(", ")).into());
    }
    Ok(files.into_iter().collect())
}
