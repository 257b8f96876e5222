//! Loading fix notes from a directory on disk

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::version_from_file_name;
use crate::error::{self, Result};

/// List the regular files directly inside `dir` as `(file name, path)` pairs
///
/// Subdirectories are not descended into. Entries come back sorted by file
/// name so the catalog order does not depend on the file system. An entry
/// that cannot be inspected is only an error if it is named like a fix note.
pub fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(error::fs::dir_not_found(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 && !names_fix_note(e.path()) => continue,
            Err(e) => {
                let path = e.path().unwrap_or(dir).display().to_string();
                return Err(error::fs::read_failed(path, e.to_string()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // Non-UTF-8 names can never be version-named notes
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        files.push((name.to_string(), entry.path().to_path_buf()));
    }

    Ok(files)
}

fn names_fix_note(path: Option<&Path>) -> bool {
    path.and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .and_then(version_from_file_name)
        .is_some()
}
