use anyhow::{anyhow, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;
use structopt::StructOpt;

mod alias;
mod extract;
mod replace;
mod walk;

#[derive(StructOpt)]
struct Cli {
    /// Root directory to rewrite. Wrapping quotes and padding are
    /// stripped, so drag-and-dropped paths work as-is.
    root_dir: String,
}

fn main() -> Result<()> {
    let Cli { root_dir } = Cli::from_args();

    let root = clean_root_input(&root_dir);
    let root = fs::canonicalize(&root).map_err(|error| anyhow!("can't open {:?}: {}", root, error))?;

    if !root.is_dir() {
        return Err(anyhow!("{:?} is not a directory", root));
    }

    let started = Instant::now();
    let changed = rewrite_tree(&root)?;

    println!("Rewrote {} files in {:.2?}", changed, started.elapsed());
    Ok(())
}

fn clean_root_input(raw: &str) -> String {
    let trimmed = raw.trim();

    trimmed
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            trimmed
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        })
        .unwrap_or(trimmed)
        .to_string()
}

/// Rewrites every source file under `root` and returns the number of
/// files that actually changed. A failing file is reported and skipped;
/// the rest of the tree is still processed.
fn rewrite_tree(root: &Path) -> Result<usize> {
    let files = walk::source_files(root)?;

    let changed = files
        .par_iter()
        .map(|file| match rewrite_file(file) {
            Ok(changed) => changed,
            Err(error) => {
                eprintln!("skipping {:?}: {:#}", file, error);
                false
            }
        })
        .filter(|changed| *changed)
        .count();

    Ok(changed)
}

// Write back only when the rewrite produced different text, so repeated
// runs never touch timestamps.
fn rewrite_file(file: &Path) -> Result<bool> {
    let source_code = fs::read_to_string(file)?;
    let dir_name = containing_dir_name(file);

    match replace::replace_imports(&source_code, &dir_name) {
        Some(rope) => {
            fs::write(file, rope.to_string())?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn containing_dir_name(file: &Path) -> String {
    file.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .to_string()
}
