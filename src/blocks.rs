/// Opening tags; the long form wins when both match at the same offset.
const OPEN_TAG: &str = "<?";
const OPEN_TAG_FULL: &str = "<?php";
pub const CLOSE_TAG: &str = "?>";

/// One embedded PHP region, exclusive of its delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Byte offset of the content within the whole file.
    pub start_offset: usize,
    /// Content length in bytes.
    pub size: usize,
    pub content: String,
}

/// Locates the next code block at or after `search_from`.
///
/// A block opened but never closed before end-of-file is not a block:
/// returning `None` here is what keeps a malformed trailing tag from
/// swallowing the rest of the file.
pub fn next_block(file_contents: &str, search_from: usize) -> Option<CodeBlock> {
    if search_from > file_contents.len() {
        return None;
    }
    let open_rel = file_contents[search_from..].find(OPEN_TAG)?;
    let open = search_from + open_rel;

    let tag_len = if file_contents[open..].starts_with(OPEN_TAG_FULL) {
        OPEN_TAG_FULL.len()
    } else {
        OPEN_TAG.len()
    };
    let content_start = open + tag_len;

    let close_rel = file_contents[content_start..].find(CLOSE_TAG)?;
    let content_end = content_start + close_rel;

    Some(CodeBlock {
        start_offset: content_start,
        size: content_end - content_start,
        content: file_contents[content_start..content_end].to_string(),
    })
}
