//! Quote stripping for JSON-rendered text.
//!
//! Contextual values attached to a record are often JSON: a serialized
//! struct, or an error whose message embeds a JSON document. [`clean`]
//! removes the double quotes that sit next to structural punctuation so the
//! text reads as `{key: value, list: [a, b]}` instead of
//! `{"key":"value","list":["a","b"]}`. Quotes inside string content that are
//! not adjacent to structural punctuation are left alone.
//!
//! # Example
//! ```
//! use typerr_core::clean;
//! assert_eq!(clean(r#"{"a":"b","c":["d"]}"#), "{a: b, c: [d]}");
//! ```

/// Structural patterns and their replacements, longest first.
///
/// At any position at most one pattern of a given length can match, so
/// testing longer patterns first makes `":["` win over `":`, and `":"` win
/// over `":`.
const PATTERNS: &[(&str, &str)] = &[
    ("\"],\"", "], "),
    ("\":[\"", ": ["),
    ("\",\"", ", "),
    ("\":\"", ": "),
    ("{\"", "{"),
    ("[\"", "["),
    ("\":", ": "),
    (",\"", ", "),
    ("\"]", "]"),
    ("\"}", "}"),
];

/// Strip structural quoting from a JSON-rendered string.
///
/// Single left-to-right pass: at each position the first matching pattern is
/// replaced and the scan jumps past it; otherwise the current character is
/// copied unchanged. Input without any pattern is returned as-is.
pub fn clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if let Some((pattern, replacement)) = match_pattern(rest) {
            out.push_str(replacement);
            pos += pattern.len();
            continue;
        }

        // `pos` always sits on a char boundary: patterns are ASCII and we
        // otherwise advance by whole characters.
        let ch = rest.chars().next().unwrap_or_default();
        out.push(ch);
        pos += ch.len_utf8();
    }

    out
}

fn match_pattern(rest: &str) -> Option<(&'static str, &'static str)> {
    PATTERNS
        .iter()
        .find(|(pattern, _)| rest.starts_with(pattern))
        .copied()
}
