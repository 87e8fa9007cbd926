//! JSON output formatter

use super::{OutputFormatter, Simplified};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<Simplified>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &Simplified) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
