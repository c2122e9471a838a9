use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::builtins::is_builtin;
use crate::config::ObfuscationConfig;
use crate::literals::{find_literal_spans, in_literal};

/// `function name(` — anchored to the declaration keyword.
static FUNCTION_DECL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"function\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap()
});

/// Class declaration with optional modifiers and inheritance clauses.
static CLASS_DECL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:final|abstract)\s+)*\bclass\s+([A-Za-z_][A-Za-z0-9_]*)(?:\s+(?:extends\s+\w+|implements\s+\w+(?:\s*,\s*\w+)*))*\s*\{",
    )
    .unwrap()
});

/// Names gathered over the whole file during pass 1 and read,
/// never written, during pass 2.
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub functions: HashSet<String>,
    pub classes: HashSet<String>,
}

/// Records declared class and function names from one block.
///
/// Classes are collected first: a function declaration sharing a class's
/// name is that class's constructor and is not tracked separately.
/// Built-ins and user-excluded names never enter the table.
pub fn collect_symbols(code: &str, table: &mut SymbolTable, config: &ObfuscationConfig) {
    let spans = find_literal_spans(code);

    for caps in CLASS_DECL_REGEX.captures_iter(code) {
        let name = caps.get(1).unwrap();
        if in_literal(&spans, name.start()) || config.excluded_functions.contains(name.as_str()) {
            continue;
        }
        table.classes.insert(name.as_str().to_string());
    }

    for caps in FUNCTION_DECL_REGEX.captures_iter(code) {
        let name = caps.get(1).unwrap();
        if in_literal(&spans, name.start()) {
            continue;
        }
        let name = name.as_str();
        if table.classes.contains(name)
            || config.excluded_functions.contains(name)
            || is_builtin(name)
        {
            continue;
        }
        table.functions.insert(name.to_string());
    }
}
