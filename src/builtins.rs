use std::collections::HashSet;

use once_cell::sync::Lazy;

/// PHP built-in functions that must never enter the symbol table.
/// Not exhaustive; covers the names that show up in ordinary scripts.
const PHP_BUILTINS: &[&str] = &[
    "array", "array_filter", "array_key_exists", "array_keys", "array_map",
    "array_merge", "array_pop", "array_push", "array_search", "array_shift",
    "array_slice", "array_values", "basename", "call_user_func", "ceil",
    "chr", "compact", "count", "date", "define", "defined", "die", "dirname",
    "echo", "empty", "end", "explode", "extract", "fclose", "feof", "fgets",
    "file_exists", "file_get_contents", "file_put_contents", "floor",
    "fopen", "fread", "function_exists", "fwrite", "header", "htmlspecialchars",
    "implode", "in_array", "include", "intval", "is_array", "is_callable",
    "is_numeric", "is_string", "isset", "json_decode", "json_encode",
    "krsort", "ksort", "list", "ltrim", "max", "md5", "microtime", "min",
    "mkdir", "nl2br", "number_format", "ord", "pathinfo", "preg_match",
    "preg_match_all", "preg_replace", "preg_split", "print", "print_r",
    "printf", "rand", "range", "require", "require_once", "return", "round",
    "rsort", "rtrim", "serialize", "sizeof", "sort", "sprintf", "sqrt",
    "str_pad", "str_repeat", "str_replace", "str_split", "strlen",
    "strpos", "strrev", "strtolower", "strtoupper", "strval", "substr",
    "substr_replace", "time", "trim", "ucfirst", "ucwords", "unlink",
    "unserialize", "unset", "urlencode", "usort", "var_dump", "vsprintf",
];

static BUILTIN_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PHP_BUILTINS.iter().copied().collect());

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_SET.contains(name)
}
