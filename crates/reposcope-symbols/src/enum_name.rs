//! Enum-style name matching
//!
//! Names of requests, line categories, colors and attributes are matched
//! ignoring ASCII case, with `-`, `_` and `.` treated as the same character.
//! Comparison is byte-wise, so multi-byte UTF-8 sequences only match exactly.

fn is_separator(byte: u8) -> bool {
    matches!(byte, b'-' | b'_' | b'.')
}

fn bytes_match(a: u8, b: u8) -> bool {
    a.eq_ignore_ascii_case(&b) || (is_separator(a) && is_separator(b))
}

/// Check whether `text` starts with `prefix` under enum-style comparison.
///
/// An empty prefix trivially matches; callers that treat empty prefixes as
/// "never matches" must check for that themselves.
pub fn enum_starts_with(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text
            .bytes()
            .zip(prefix.bytes())
            .all(|(a, b)| bytes_match(a, b))
}

/// Exact-length enum-style comparison
pub fn enum_equals(name: &str, other: &str) -> bool {
    name.len() == other.len() && enum_starts_with(name, other)
}

/// Canonical display form of an enum name: lowercase with `-` separators
pub fn enum_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
