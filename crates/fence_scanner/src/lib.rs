use fence_marker::{open_fence, FENCE};

/// Scans Markdown text and returns the body of every fenced code block
/// tagged with `lang`, in document order.
///
/// A block opens on a line whose trimmed form starts with the opening token
/// for `lang` (anything after the tag on that line is tolerated) and closes
/// on a line whose trimmed form is exactly the bare fence token. The fence
/// lines themselves are never part of the body. The collected lines are
/// joined with newlines and the whole body is trimmed; bodies that end up
/// empty are dropped, as is a block still open at end of input.
///
/// An opening token seen while already inside a block is ordinary content.
pub fn scan_fenced_blocks(content: &str, lang: &str) -> Vec<String> {
    let open_token = open_fence(lang);
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if !in_block && trimmed.starts_with(&open_token) {
            in_block = true;
            current.clear();
        } else if in_block && trimmed == FENCE {
            in_block = false;
            let body = current.join("\n");
            let body = body.trim();
            if !body.is_empty() {
                blocks.push(body.to_string());
            }
            current.clear();
        } else if in_block {
            // Raw line, indentation preserved.
            current.push(line);
        }
    }

    blocks
}
