use once_cell::sync::Lazy;
use regex::Regex;

/// Snippets shorter than this after trimming are not worth extracting.
const MIN_MEANINGFUL_CHARS: usize = 10;

// Stub lines documentation authors leave for the reader to fill in.
// Matched case-insensitively against whole lines anywhere in the snippet.
static STUB_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?im)^\s*//\s*your\s+code\s+here\s*$", // // Your code here
        r"(?im)^\s*//\s*\.\.\.\s*$",             // // ...
        r"(?im)^\s*#\s*\.\.\.\s*$",              // # ...
        r"(?im)^\s*\.\.\.\s*$",                  // ...
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Decides whether a snippet is a placeholder rather than real example code.
///
/// Returns `true` when any stub-marker line is present, or when the trimmed
/// text is shorter than the minimum meaningful length.
pub fn is_placeholder(code: &str) -> bool {
    let stripped = code.trim();

    if STUB_MARKERS.iter().any(|re| re.is_match(stripped)) {
        return true;
    }

    stripped.chars().count() < MIN_MEANINGFUL_CHARS
}
