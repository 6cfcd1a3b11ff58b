use std::ops::Range;

/// Half-open range of character offsets `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single contiguous change: `removed` characters starting at `start`
/// were replaced by `inserted` characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl Edit {
    /// Smallest edit turning `before` into `after`, found by trimming the
    /// common prefix and suffix. `None` when the texts are equal.
    pub fn between(before: &str, after: &str) -> Option<Self> {
        if before == after {
            return None;
        }

        let prefix = before
            .chars()
            .zip(after.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let before_len = before.chars().count();
        let after_len = after.chars().count();
        let suffix = before
            .chars()
            .rev()
            .zip(after.chars().rev())
            .take_while(|(a, b)| a == b)
            .count()
            .min(before_len - prefix)
            .min(after_len - prefix);

        Some(Self {
            start: prefix,
            removed: before_len - prefix - suffix,
            inserted: after_len - prefix - suffix,
        })
    }

    fn removed_end(&self) -> usize {
        self.start + self.removed
    }

    /// Moves a span boundary across this edit. Removed text collapses onto
    /// `start`; text inserted exactly at a boundary stays outside the span.
    fn shift(&self, offset: usize, is_start: bool) -> usize {
        let offset = if offset <= self.start {
            offset
        } else if offset <= self.removed_end() {
            self.start
        } else {
            offset - self.removed
        };

        if offset > self.start || (is_start && offset == self.start) {
            offset + self.inserted
        } else {
            offset
        }
    }

    /// Where `span` ends up after the edit, or `None` if all of its text
    /// was removed.
    pub fn shift_span(&self, span: Span) -> Option<Span> {
        let start = self.shift(span.start, true);
        let end = self.shift(span.end, false).max(start);
        (start < end).then(|| Span::new(start, end))
    }
}

/// Caret location as shown in the status bar.
///
/// `line` is 1-based, `column` counts characters from the start of the line
/// and is 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretPosition {
    pub line: usize,
    pub column: usize,
}

/// The text of the document being edited.
///
/// Offsets handed in and out are character offsets, matching the cursor
/// indices of the text widget, never byte offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text widget, which edits the string in place.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters in the buffer.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn total_lines(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Converts a character offset into a byte offset, clamping to the end.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Converts a byte offset on a char boundary back to a character offset.
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        let byte_offset = byte_offset.min(self.text.len());
        self.text[..byte_offset].chars().count()
    }

    pub fn byte_range(&self, span: Span) -> Range<usize> {
        self.byte_offset(span.start)..self.byte_offset(span.end)
    }

    /// Removes the characters covered by `span`.
    pub fn delete(&mut self, span: Span) {
        let range = self.byte_range(span);
        self.text.replace_range(range, "");
    }

    /// Inserts `text` before the character at `at` (or at the end).
    pub fn insert(&mut self, at: usize, text: &str) {
        let byte = self.byte_offset(at);
        self.text.insert_str(byte, text);
    }

    /// Resolves a character offset into a (line, column) pair.
    pub fn caret_position(&self, offset: usize) -> CaretPosition {
        let mut line = 1;
        let mut column = 0;
        for ch in self.text.chars().take(offset) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        CaretPosition { line, column }
    }

    /// Inverse of [`Buffer::caret_position`]. Columns past the end of a line
    /// land on the line's end, lines past the end land on the buffer's end.
    pub fn offset_of(&self, position: CaretPosition) -> usize {
        let mut offset = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if index + 1 == position.line.max(1) {
                return offset + position.column.min(len);
            }
            offset += len + 1;
        }
        self.char_len()
    }
}
