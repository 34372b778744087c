// crates/struct_splitter/src/lib.rs

use once_cell::sync::Lazy;
use regex::Regex;

// A derive attribute line followed by a struct definition, annotation and
// body captured together. The lazy body match stops at the first closing
// brace, so definitions with nested braces mis-split; a known limitation.
static DERIVED_STRUCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^#\[derive.*?\]\s*\nstruct\s+\w+\s*\{.*?\}").unwrap());

/// Splits a snippet that bundles several derive-annotated struct
/// definitions into one unit per definition, in source order.
///
/// Snippets with fewer than two matches come back unchanged as the single
/// unit; the splitting only kicks in when the snippet is clearly a bundle
/// of independent definitions.
pub fn split_derived_structs(snippet: &str) -> Vec<String> {
    let matches: Vec<&str> = DERIVED_STRUCT_RE
        .find_iter(snippet)
        .map(|m| m.as_str())
        .collect();

    if matches.len() > 1 {
        matches.into_iter().map(String::from).collect()
    } else {
        vec![snippet.to_string()]
    }
}
