use crate::blocks::CLOSE_TAG;
use crate::literals::{find_literal_spans, in_literal};

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Line-comment openers handled one form at a time.
const LINE_FORMS: [&str; 2] = ["//", "#"];

/// Removes block comments, then line comments, from one code block.
/// Block comments go first so a line-comment marker sitting inside a
/// block comment's interior is never processed on its own.
pub fn strip_comments(code: &str) -> String {
    let mut code = strip_block_comments(code);
    for form in LINE_FORMS {
        code = strip_line_comments(&code, form);
    }
    code
}

/// First occurrence of `needle` at or after `from` that is not inside a
/// quoted string. Spans are computed once per call; a rejected hit resumes
/// past the end of the match instead of re-examining the protected region.
fn find_outside_literals(code: &str, needle: &str, from: usize) -> Option<usize> {
    let spans = find_literal_spans(code);
    let mut at = from;
    while let Some(rel) = code[at..].find(needle) {
        let pos = at + rel;
        if !in_literal(&spans, pos) {
            return Some(pos);
        }
        at = pos + needle.len();
    }
    None
}

fn strip_block_comments(code: &str) -> String {
    let mut code = code.to_string();
    loop {
        let Some(start) = find_outside_literals(&code, BLOCK_OPEN, 0) else {
            break;
        };
        match code[start + BLOCK_OPEN.len()..].find(BLOCK_CLOSE) {
            Some(rel) => {
                let end = start + BLOCK_OPEN.len() + rel + BLOCK_CLOSE.len();
                code.replace_range(start..end, "");
            }
            None => {
                // an unclosed /* comments out the rest of the block
                code.truncate(start);
                break;
            }
        }
    }
    code
}

/// Deletes from each comment opener to the earliest of a close tag
/// (which survives), a newline (which does not), or end of chunk.
fn strip_line_comments(code: &str, form: &str) -> String {
    let mut code = code.to_string();
    let mut cursor = 0;
    while let Some(start) = find_outside_literals(&code, form, cursor) {
        let tail = &code[start..];
        let close = tail.find(CLOSE_TAG).map(|rel| start + rel);
        let newline = tail.find('\n').map(|rel| start + rel);
        match (close, newline) {
            (Some(c), n) if n.map_or(true, |n| c < n) => {
                code.replace_range(start..c, "");
                cursor = start;
            }
            (_, Some(n)) => {
                code.replace_range(start..=n, "");
                cursor = start;
            }
            (None, None) => {
                code.truncate(start);
                break;
            }
            // guard on the first arm always accepts when newline is None
            (Some(_), None) => unreachable!(),
        }
    }
    code
}
