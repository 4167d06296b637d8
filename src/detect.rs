//! Input discovery and loading.
//!
//! Inputs are JSON paragraph dumps produced by the document parser, one
//! per source document, somewhere below a corpus root.

use crate::error::{Error, Result};
use crate::model::DocumentInput;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of paragraph dumps.
pub const INPUT_EXTENSION: &str = "json";

/// Prefix of editor lock and temp files, which are never inputs.
const TEMP_PREFIX: char = '~';

/// Check if a path names a candidate input file.
///
/// # Example
/// ```
/// use docaudit::detect::is_candidate;
///
/// assert!(is_candidate("corpus/paper.json"));
/// assert!(!is_candidate("corpus/~$paper.json"));
/// assert!(!is_candidate("corpus/paper.docx"));
/// ```
pub fn is_candidate<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let temp = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with(TEMP_PREFIX));
    let json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(INPUT_EXTENSION));
    json && !temp
}

/// Check if bytes look like a paragraph dump (a JSON object).
pub fn is_dump_bytes(data: &[u8]) -> bool {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    data.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{')
}

/// Recursively collect candidate inputs below `root`, sorted by path.
pub fn discover_inputs<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    discover_inputs_excluding(root, &[])
}

/// Like [`discover_inputs`], but skips the `excluded` files and everything
/// below the `excluded` directories.
///
/// Paths are compared in absolute form, so a relative checkpoint path
/// matches the same file reached through a relative corpus root.
pub fn discover_inputs_excluding<P: AsRef<Path>>(
    root: P,
    excluded: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let excluded: Vec<PathBuf> = excluded.iter().map(|p| absolute(p)).collect();
    let mut files = Vec::new();
    walk(root, &excluded, &mut files)?;
    files.sort();
    Ok(files)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    if excluded.is_empty() {
        return false;
    }
    let path = absolute(path);
    excluded.iter().any(|e| path.starts_with(e))
}

fn walk(dir: &Path, excluded: &[PathBuf], files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_excluded(&path, excluded) {
            log::debug!("Skipping tool-owned {}", path.display());
        } else if path.is_dir() {
            walk(&path, excluded, files)?;
        } else if is_candidate(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Load one paragraph dump.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<DocumentInput> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    if !is_dump_bytes(&data) {
        return Err(Error::InvalidInput(format!(
            "{} is not a paragraph dump",
            path.display()
        )));
    }
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&data);
    Ok(serde_json::from_slice(data)?)
}
