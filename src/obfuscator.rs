use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::blocks::next_block;
use crate::comments::strip_comments;
use crate::config::ObfuscationConfig;
use crate::literals::{find_literal_spans, in_literal};
use crate::rename::rename_symbols;
use crate::symbols::{collect_symbols, SymbolTable};
use crate::variables::rename_variables;

/// Appended verbatim to the input path to form the output path.
pub const OUTPUT_SUFFIX: &str = "obfuscated.php";

const PHP_EXTENSION: &str = "php";

static CONTROL_WS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\r]+").unwrap());

#[derive(Debug, Error)]
pub enum ObfuscationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Drives both passes over one file. Configuration is fixed for the
/// lifetime of the run; the symbol table is a local threaded through
/// pass 1 and handed to pass 2 once the whole file has been seen.
pub struct Obfuscator {
    config: ObfuscationConfig,
}

impl Obfuscator {
    pub fn new(config: ObfuscationConfig) -> Self {
        Self { config }
    }

    /// Obfuscates `path`, writing to `<path>obfuscated.php`. Returns the
    /// output path, or `None` when the extension is not `.php` (the run
    /// is then a no-op and nothing is written).
    pub fn start(&self, path: &Path) -> Result<Option<PathBuf>, ObfuscationError> {
        if !has_php_extension(path) {
            warn!("skipping {}: not a php file", path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let mut table = SymbolTable::default();
        let transformed = self.obfuscate_contents(&contents, &mut table);

        // full buffer, single write; a failure here leaves no partial output
        let out_path = output_path(path);
        fs::write(&out_path, &transformed)?;
        info!("pass 1 complete: {}", out_path.display());

        if self.config.obfuscate_declared_names {
            let written = fs::read_to_string(&out_path)?;
            let renamed = rename_symbols(&written, &table);
            fs::write(&out_path, renamed)?;
            info!(
                functions = table.functions.len(),
                classes = table.classes.len(),
                "pass 2 complete"
            );
        }

        Ok(Some(out_path))
    }

    /// Pass 1: transform each block and splice it back in place. An
    /// opener with no closer ends the walk; everything after it passes
    /// through untouched.
    fn obfuscate_contents(&self, contents: &str, table: &mut SymbolTable) -> String {
        let mut contents = contents.to_string();
        let mut cursor = 0;
        while let Some(block) = next_block(&contents, cursor) {
            let transformed = self.obfuscate_block(&block.content, table);
            debug!(offset = block.start_offset, size = block.size, "block transformed");
            let end = block.start_offset + block.size;
            cursor = block.start_offset + transformed.len();
            contents.replace_range(block.start_offset..end, &transformed);
        }
        contents
    }

    fn obfuscate_block(&self, code: &str, table: &mut SymbolTable) -> String {
        let mut code = strip_comments(code);
        if self.config.obfuscate_variables {
            code = rename_variables(&code, &self.config.excluded_variables);
        }
        if self.config.remove_whitespace {
            code = collapse_whitespace(&code);
        }
        if self.config.obfuscate_declared_names {
            // collection runs last, over the text pass 2 will see
            collect_symbols(&code, table, &self.config);
        }
        code
    }
}

/// Collapses each run of tab/newline/carriage-return outside string
/// literals to a single space. Runs inside literals are kept byte-for-byte.
fn collapse_whitespace(code: &str) -> String {
    let spans = find_literal_spans(code);
    let mut out = String::with_capacity(code.len());
    let mut last = 0;
    for m in CONTROL_WS_REGEX.find_iter(code) {
        if in_literal(&spans, m.start()) {
            continue;
        }
        out.push_str(&code[last..m.start()]);
        out.push(' ');
        last = m.end();
    }
    out.push_str(&code[last..]);
    out
}

fn has_php_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(PHP_EXTENSION))
}

fn output_path(path: &Path) -> PathBuf {
    let mut out = path.as_os_str().to_owned();
    out.push(OUTPUT_SUFFIX);
    PathBuf::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_php_extension(Path::new("index.PHP")));
        assert!(has_php_extension(Path::new("a/b/page.php")));
        assert!(!has_php_extension(Path::new("notes.txt")));
        assert!(!has_php_extension(Path::new("php")));
    }

    #[test]
    fn output_path_appends_suffix() {
        assert_eq!(
            output_path(Path::new("site/index.php")),
            PathBuf::from("site/index.phpobfuscated.php")
        );
    }

    #[test]
    fn whitespace_collapses_outside_literals_only() {
        let code = "$a = 1;\n\t$b = \"keep\nthis\";\r\n";
        let out = collapse_whitespace(code);
        assert_eq!(out, "$a = 1; $b = \"keep\nthis\"; ");
    }
}
