//! Tokenizer for the `KEY:value;KEY:value;;` sub-syntax used by MECARD and
//! Wi-Fi payloads.
//!
//! Segments are separated by `;`. A backslash escapes the character that
//! follows it, so `\;` is a literal semicolon and `\\` a literal backslash.
//! Only segments closed by a delimiter are emitted; whatever trails the last
//! `;` is dropped, which is how `;;` terminators end up contributing nothing.
//!
//! ```rust
//! use payload::parse_fields;
//!
//! let fields = parse_fields(r"N:John Doe;EMAIL:john\@example.com;;", &["N", "EMAIL"]);
//! assert_eq!(fields["N"], "John Doe");
//! assert_eq!(fields["EMAIL"], "john@example.com");
//! ```
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A `key:value` pair taken from one delimited segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Text before the first colon.
    pub key: String,
    /// Text after the first colon, unescaped.
    pub value: String,
}

/// Walks `s` and hands every closed, unescaped segment to `emit`.
fn for_each_segment(s: &str, mut emit: impl FnMut(String)) {
    let mut current = String::new();
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == ';' {
            emit(std::mem::take(&mut current));
        } else if ch == '\\' {
            escaped = true;
        } else {
            current.push(ch);
        }
    }
    // A dangling escape and the unterminated tail are both discarded.
}

/// Splits `s` into unescaped segments, dropping the unterminated tail.
///
/// ```rust
/// use payload::split_segments;
///
/// assert_eq!(split_segments(r"a;b\;c;tail"), vec!["a", "b;c"]);
/// assert!(split_segments("no delimiter").is_empty());
/// ```
pub fn split_segments(s: &str) -> Vec<String> {
    let mut segments = Vec::new();
    for_each_segment(s, |segment| segments.push(segment));
    segments
}

/// Splits `s` into [`Token`]s. Segments without a colon are skipped.
pub fn tokenize(s: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for_each_segment(s, |segment| {
        if let Some((key, value)) = segment.split_once(':') {
            tokens.push(Token {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    });
    tokens
}

/// Collects the values of the requested keys.
///
/// Keys match case-sensitively. Tokens with any other key are ignored, and
/// when a key repeats the last occurrence wins.
pub fn parse_fields<'k>(s: &str, keys: &[&'k str]) -> HashMap<&'k str, String> {
    let mut fields = HashMap::with_capacity(keys.len());
    for token in tokenize(s) {
        if let Some(key) = keys.iter().find(|key| **key == token.key) {
            fields.insert(*key, token.value);
        }
    }
    fields
}
