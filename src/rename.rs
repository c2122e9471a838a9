use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::blocks::next_block;
use crate::digest::digest;
use crate::literals::{find_literal_spans, in_literal};
use crate::symbols::SymbolTable;

pub const FUNCTION_PREFIX: &str = "F";
pub const CLASS_PREFIX: &str = "C";

/// Any identifier followed by `(` — declarations, calls, `new Foo(...)`.
/// Unanchored on purpose; the anchored declaration pattern lives in
/// symbols.rs and feeds pass 1.
static USAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap()
});

/// Class references that carry no parameter list.
static CLASS_REF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:class|new|extends|instanceof)\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

/// Pass 2: rewrites every collected symbol across the already-transformed
/// file. Each block is rewritten and spliced back, and the cursor advances
/// past the block's *new* length; a renamed block rarely keeps its size.
pub fn rename_symbols(file_contents: &str, table: &SymbolTable) -> String {
    let mut contents = file_contents.to_string();
    let mut cursor = 0;
    while let Some(block) = next_block(&contents, cursor) {
        let renamed = rename_in_block(&block.content, table);
        let end = block.start_offset + block.size;
        cursor = block.start_offset + renamed.len();
        contents.replace_range(block.start_offset..end, &renamed);
    }
    contents
}

fn rename_in_block(code: &str, table: &SymbolTable) -> String {
    // function set first, then class set, else leave the name alone
    let code = apply(code, &USAGE_REGEX, |name| {
        if table.functions.contains(name) {
            Some(format!("{}{}", FUNCTION_PREFIX, digest(name)))
        } else if table.classes.contains(name) {
            Some(format!("{}{}", CLASS_PREFIX, digest(name)))
        } else {
            None
        }
    });
    apply(&code, &CLASS_REF_REGEX, |name| {
        table
            .classes
            .contains(name)
            .then(|| format!("{}{}", CLASS_PREFIX, digest(name)))
    })
}

/// Replaces capture group 1 of each match outside string literals,
/// back-to-front so pending offsets stay valid.
fn apply(code: &str, pattern: &Regex, replacement: impl Fn(&str) -> Option<String>) -> String {
    let spans = find_literal_spans(code);
    let replacements: Vec<(Range<usize>, String)> = pattern
        .captures_iter(code)
        .filter_map(|caps| {
            let name = caps.get(1).unwrap();
            if in_literal(&spans, name.start()) {
                return None;
            }
            replacement(name.as_str()).map(|r| (name.range(), r))
        })
        .collect();

    let mut out = code.to_string();
    for (range, text) in replacements.into_iter().rev() {
        out.replace_range(range, &text);
    }
    out
}
