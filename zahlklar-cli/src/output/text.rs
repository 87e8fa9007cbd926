//! Plain text output formatter

use super::{OutputFormatter, Simplified};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter
///
/// Writes the simplified text as is, or input/output pairs when
/// `show_input` is set.
pub struct TextFormatter<W: Write> {
    writer: W,
    show_input: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_input: bool) -> Self {
        Self { writer, show_input }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &Simplified) -> Result<()> {
        if self.show_input {
            writeln!(self.writer)?;
            writeln!(self.writer, "Input:  {}", entry.input.trim_end())?;
            writeln!(self.writer, "Output: {}", entry.output.trim_end())?;
        } else {
            write!(self.writer, "{}", entry.output)?;
            if !entry.output.ends_with('\n') {
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
