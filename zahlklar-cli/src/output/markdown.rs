//! Markdown output formatter

use super::{OutputFormatter, Simplified};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per text, original quoted
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    entry_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entry_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, entry: &Simplified) -> Result<()> {
        self.entry_count += 1;
        writeln!(self.writer, "## {}. {}", self.entry_count, entry.source)?;
        writeln!(self.writer)?;
        for line in entry.input.trim_end().lines() {
            writeln!(self.writer, "> {line}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", entry.output.trim_end())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total texts: {}*", self.entry_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
