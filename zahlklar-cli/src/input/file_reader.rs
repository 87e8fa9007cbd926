//! Text input sources

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads UTF-8 text from files or stdin
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read everything from `reader` as UTF-8 text
    pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input as UTF-8")?;
        Ok(content)
    }

    /// Read all of stdin
    pub fn read_stdin() -> Result<String> {
        Self::read_all(io::stdin().lock())
    }
}
