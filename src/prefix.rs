// Lexical rules for namespace prefixes.

#[inline]
fn is_prefix_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

/// Check whether a string is a valid namespace prefix.
///
/// A prefix starts with an ASCII letter or underscore, followed by any number
/// of ASCII letters, digits, underscores, hyphens and periods.
///
/// The empty string is never a valid prefix here; callers that accept the
/// empty prefix check for it before asking.
pub fn is_valid_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_prefix_start_char(c) => chars.all(is_prefix_char),
        _ => false,
    }
}
