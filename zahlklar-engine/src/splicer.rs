//! Span splicing
//!
//! A stage finds spans left to right and decides a replacement for some of
//! them. The splicer rebuilds the text from the untouched gaps and the
//! replacements, and remembers where each replacement landed in the output.

use std::ops::Range;

/// Output of a stage: the new text plus the ranges it rewrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spliced {
    /// Rewritten text
    pub text: String,
    /// Byte ranges of `text` produced by replacements, in order
    pub protected: Vec<Range<usize>>,
}

impl Spliced {
    /// Text with no protected ranges
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            protected: Vec::new(),
        }
    }

    /// Whether `span` overlaps any protected range
    pub fn is_protected(&self, span: &Range<usize>) -> bool {
        self.protected
            .iter()
            .any(|p| p.start < span.end && span.start < p.end)
    }
}

/// Incremental builder for a [`Spliced`] text
#[derive(Debug)]
pub struct Splicer<'t> {
    source: &'t str,
    output: String,
    cursor: usize,
    protected: Vec<Range<usize>>,
}

impl<'t> Splicer<'t> {
    /// Start splicing `source`
    pub fn new(source: &'t str) -> Self {
        Self {
            source,
            output: String::with_capacity(source.len()),
            cursor: 0,
            protected: Vec::new(),
        }
    }

    /// Replace `source[start..end]` with `replacement`
    ///
    /// Spans must arrive in order and must not overlap.
    pub fn replace(&mut self, start: usize, end: usize, replacement: &str) {
        debug_assert!(start >= self.cursor, "spans out of order");
        debug_assert!(start <= end);

        let start = start.max(self.cursor);
        self.output.push_str(&self.source[self.cursor..start]);

        let at = self.output.len();
        self.output.push_str(replacement);
        self.protected.push(at..self.output.len());

        self.cursor = end.max(start);
    }

    /// Copy the remaining text and return the result
    pub fn finish(mut self) -> Spliced {
        self.output.push_str(&self.source[self.cursor..]);
        Spliced {
            text: self.output,
            protected: self.protected,
        }
    }
}
