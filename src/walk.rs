use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const SOURCE_SUFFIXES: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| name.eq("node_modules") || name.starts_with('.'))
            .unwrap_or(true)
}

fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .map(|name| SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
            .unwrap_or(false)
}

/// Lists every rewritable source file under `root`, never descending into
/// `node_modules` or dot-prefixed directories.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(anyhow!("{:?} does not exist or is not a directory", root));
    }

    let files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| is_source_file(entry))
        .map(|entry| entry.into_path())
        .collect();

    Ok(files)
}
