use std::process;

use anyhow::Result;
use clap::{Arg, Command};

use extract_snippets::extract_snippets_from_file;

fn main() -> Result<()> {
    let matches = Command::new("extract_snippets")
        .version("0.1.0")
        .about("Extracts Rust code blocks from a Markdown document into numbered snippet files")
        .arg(
            Arg::new("file_path")
                .required(true)
                .help("Path to the Markdown document"),
        )
        .arg(
            Arg::new("output_dir")
                .required(true)
                .help("Existing directory the snippet and count files are written into"),
        )
        .arg(
            Arg::new("safe_name")
                .required(true)
                .help("Name used verbatim to build the output filenames"),
        )
        .try_get_matches()
        .unwrap_or_else(|err| {
            // clap exits with code 2 on usage errors; this tool's contract
            // is exit code 1. Help and version output still exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        });

    let file_path = matches.get_one::<String>("file_path").unwrap();
    let output_dir = matches.get_one::<String>("output_dir").unwrap();
    let safe_name = matches.get_one::<String>("safe_name").unwrap();

    let count = extract_snippets_from_file(file_path, output_dir, safe_name)?;
    println!("Extracted {} snippets from {}", count, file_path);
    Ok(())
}
