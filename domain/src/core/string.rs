//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters (Unicode scalar values).
///
/// Returns the (possibly shortened) text and whether anything was cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => (&s[..end], true),
        None => (s, false),
    }
}

/// Line boundaries: `\n` and `\r`, vertical tab and form feed, the
/// file/group/record separators, NEL, and U+2028/U+2029.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Trim every line, drop the blank ones and join the rest with `\n`.
pub fn collapse_blank_lines(text: &str) -> String {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
