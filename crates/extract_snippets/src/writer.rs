// crates/extract_snippets/src/writer.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Extension given to every snippet file.
pub const SNIPPET_EXT: &str = "rs";

/// Writes each unit to `<name>_snippet_<i>.rs` inside `out_dir`, indices
/// 1-based in emission order with no gaps, then records the total in
/// `count_<name>.txt` as a bare decimal, overwriting any previous count.
///
/// The output directory must already exist. Returns the number of snippet
/// files written.
pub fn write_snippets(out_dir: &Path, safe_name: &str, units: &[String]) -> Result<usize> {
    let mut written = 0usize;

    for unit in units {
        written += 1;
        let snippet_path =
            out_dir.join(format!("{}_snippet_{}.{}", safe_name, written, SNIPPET_EXT));
        fs::write(&snippet_path, unit)
            .with_context(|| format!("Failed to write snippet file {}", snippet_path.display()))?;
    }

    let count_path = out_dir.join(format!("count_{}.txt", safe_name));
    fs::write(&count_path, written.to_string())
        .with_context(|| format!("Failed to write count file {}", count_path.display()))?;

    Ok(written)
}
