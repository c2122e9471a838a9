use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::digest::digest;
use crate::literals::{find_literal_spans, in_literal};

/// Prefix for renamed variables; the `$` keeps the token a valid variable.
pub const VARIABLE_PREFIX: &str = "$R";

/// `$` followed by a PHP identifier (high bytes are legal in PHP names).
static VARIABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$[a-zA-Z_\x7f-\x{10FFFF}][a-zA-Z0-9_\x7f-\x{10FFFF}]*").unwrap()
});

/// Replaces every variable token outside string literals with its
/// digest-derived name. Matches are applied back-to-front so earlier
/// replacements never shift the offsets of matches still pending.
/// `excluded` holds bare names, without the `$` sigil.
pub fn rename_variables(code: &str, excluded: &HashSet<String>) -> String {
    let spans = find_literal_spans(code);
    let matches: Vec<_> = VARIABLE_REGEX
        .find_iter(code)
        .filter(|m| !in_literal(&spans, m.start()))
        .map(|m| (m.range(), m.as_str()))
        .collect();

    let mut out = code.to_string();
    for (range, text) in matches.into_iter().rev() {
        if excluded.contains(&text[1..]) {
            continue;
        }
        // digest covers the sigil too, matching every other occurrence
        out.replace_range(range, &format!("{}{}", VARIABLE_PREFIX, digest(text)));
    }
    out
}
