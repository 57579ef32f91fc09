//! File counts by extension.
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory names never descended into.
pub const SKIPPED_DIRS: [&str; 5] = [".git", "build", "result", "node_modules", "target"];

/// Label for files without an extension.
pub const NO_EXTENSION: &str = "(none)";

/// Counts files under `root` by lower-cased extension (with leading dot).
///
/// Sorted by count descending, then extension ascending. An unreadable `root`
/// is an error. Unreadable subdirectories are skipped.
pub fn count_by_extension(root: &Path) -> io::Result<Vec<(String, usize)>> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if dir == root => return Err(e),
            Err(e) => {
                debug!("skipping {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            if file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
                // Linked directories are neither counted nor followed.
                continue;
            }
            if file_type.is_dir() {
                let skipped = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name));
                if !skipped {
                    stack.push(path);
                }
            } else {
                *counts.entry(extension_label(&path)).or_default() += 1;
            }
        }
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(sorted)
}

fn extension_label(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_lowercase()),
        _ => NO_EXTENSION.to_string(),
    }
}
