//! Text sanitizing helpers for post content.

/// Normalize text to printable ASCII.
///
/// Smart quotes are mapped to their ASCII equivalents first, then every
/// remaining character outside `0x20..=0x7E` is dropped. The substitution
/// must run before the range filter so multi-byte quote characters are
/// converted rather than stripped.
///
/// # Example
///
/// ```
/// use bluesky_client::filter_text;
///
/// assert_eq!(filter_text("\u{201C}hi\u{201D} \u{2018}there\u{2019}"), "\"hi\" 'there'");
/// ```
pub fn filter_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            ' '..='~' => out.push(c),
            _ => {}
        }
    }

    out
}

/// Split a string on runs of whitespace, discarding empty tokens.
pub fn split_into_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}
