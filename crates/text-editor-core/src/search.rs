use crate::buffer::{Buffer, Span};

/// Finds the first literal, case-sensitive occurrence of `target`, scanning
/// from the top of the buffer. An empty target never matches.
pub fn find_first(buffer: &Buffer, target: &str) -> Option<Span> {
    if target.is_empty() {
        return None;
    }

    let byte_start = buffer.as_str().find(target)?;
    let start = buffer.char_offset(byte_start);
    Some(Span::new(start, start + target.chars().count()))
}

/// Replaces the first occurrence of `target` with `replacement`.
///
/// Returns the span now covered by the replacement text, or `None` when
/// nothing was changed (empty strings or no match).
pub fn replace_first(buffer: &mut Buffer, target: &str, replacement: &str) -> Option<Span> {
    if replacement.is_empty() {
        return None;
    }

    let found = find_first(buffer, target)?;
    buffer.delete(found);
    buffer.insert(found.start, replacement);
    Some(Span::new(
        found.start,
        found.start + replacement.chars().count(),
    ))
}
