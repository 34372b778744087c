use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use fence_scanner::scan_fenced_blocks;
use placeholder_filter::is_placeholder;
use struct_splitter::split_derived_structs;

pub mod writer;

/// Fence tag of the reference language this tool extracts.
pub const LANG_TAG: &str = "rust";

/// Runs the extraction pipeline for one Markdown document: read the file,
/// scan it for fenced blocks tagged with [`LANG_TAG`], drop placeholder
/// blocks, split blocks that bundle several derive-annotated struct
/// definitions, and write the numbered snippet files plus the count file
/// into `out_dir`.
///
/// Returns the number of snippet files written.
///
/// # Errors
///
/// Returns an error if the document cannot be read (or is not valid UTF-8),
/// or if a snippet file or the count file cannot be written. Output written
/// before the failure point is left in place.
pub fn extract_snippets_from_file<P: AsRef<Path>, Q: AsRef<Path>>(
    file_path: P,
    out_dir: Q,
    safe_name: &str,
) -> Result<usize> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file {}", file_path.display()))?;

    let units: Vec<String> = scan_fenced_blocks(&content, LANG_TAG)
        .into_iter()
        .filter(|snippet| !is_placeholder(snippet))
        .flat_map(|snippet| split_derived_structs(&snippet))
        .collect();

    writer::write_snippets(out_dir.as_ref(), safe_name, &units)
}
