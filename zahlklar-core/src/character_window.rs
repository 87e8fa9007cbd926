//! Character-bounded context windows
//!
//! Context predicates look at a fixed number of *characters* around a byte
//! position. German text contains multi-byte characters (ä, ö, ü, ß, €), so
//! every window is cut on UTF-8 boundaries.

/// A borrowed slice of text around a byte position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    text: &'a str,
}

impl<'a> ContextWindow<'a> {
    /// Window of up to `before` characters before and `after` characters
    /// from `pos` onwards
    ///
    /// `pos` is clamped to the text length and moved back to the nearest
    /// character boundary.
    pub fn around(text: &'a str, pos: usize, before: usize, after: usize) -> Self {
        let pos = floor_char_boundary(text, pos);
        let start = text[..pos]
            .char_indices()
            .rev()
            .take(before)
            .last()
            .map_or(pos, |(i, _)| i);
        let end = text[pos..]
            .char_indices()
            .nth(after)
            .map_or(text.len(), |(i, _)| pos + i);

        Self {
            text: &text[start..end],
        }
    }

    /// Up to `count` characters directly before `pos`
    pub fn before(text: &'a str, pos: usize, count: usize) -> Self {
        Self::around(text, pos, count, 0)
    }

    /// Up to `count` characters starting at `pos`
    pub fn after(text: &'a str, pos: usize, count: usize) -> Self {
        Self::around(text, pos, 0, count)
    }

    /// Window contents
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Whether the window contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
