use once_cell::sync::Lazy;
use regex::Regex;

/// Single- or double-quoted string, non-greedy, escaped quotes allowed.
/// An unterminated string never matches, so nothing after it is hidden.
static STRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#).unwrap()
});

/// Byte range of one quoted string within a chunk, quotes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan {
    pub start: usize,
    pub end: usize,
}

impl LiteralSpan {
    /// Strict interiority: the delimiting quotes themselves do not count.
    pub fn contains(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}

/// Scans a chunk once and returns every quoted-string span in it.
/// Callers filter their own matches against this list instead of
/// re-scanning for strings on every candidate match.
pub fn find_literal_spans(chunk: &str) -> Vec<LiteralSpan> {
    STRING_REGEX
        .find_iter(chunk)
        .map(|m| LiteralSpan { start: m.start(), end: m.end() })
        .collect()
}

/// True when `offset` falls inside any of the given spans.
pub fn in_literal(spans: &[LiteralSpan], offset: usize) -> bool {
    spans.iter().any(|s| s.contains(offset))
}
