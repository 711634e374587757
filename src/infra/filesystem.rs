//! Filesystem operations
//!
//! Handles file and directory operations: install tree assembly, wholesale
//! directory replacement, and wildcard runtime-binary copies.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents; absent directories are fine
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Copy a single file, creating the destination's parent directories
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    if let Some(parent) = to.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(from, to).map_err(|e| FilesystemError::CopyFile {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(())
}

/// Replace `dest` with a copy of the `src` tree
///
/// Any existing destination directory is removed first; contents are never
/// merged.
pub fn replace_dir(src: &Path, dest: &Path) -> Result<(), FilesystemError> {
    let copy_error = |error: String| FilesystemError::CopyDir {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        error,
    };

    remove_dir_all(dest)?;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| copy_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| copy_error(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Compile a file-name wildcard (`*`, `?`) into an anchored regex
pub fn wildcard_regex(pattern: &str) -> Result<Regex, FilesystemError> {
    let mut expression = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => expression.push_str(".*"),
            '?' => expression.push('.'),
            other => expression.push_str(&regex::escape(&other.to_string())),
        }
    }
    expression.push('$');

    Regex::new(&expression).map_err(|e| FilesystemError::Pattern {
        pattern: pattern.to_string(),
        error: e.to_string(),
    })
}

/// Copy every file in `src_dir` whose name matches `pattern` into
/// `dest_dir`, returning the destination paths in sorted order
pub fn copy_matching(
    src_dir: &Path,
    pattern: &str,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, FilesystemError> {
    let regex = wildcard_regex(pattern)?;

    let entries = std::fs::read_dir(src_dir).map_err(|e| FilesystemError::ReadDir {
        path: src_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: src_dir.to_path_buf(),
            error: e.to_string(),
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if entry.path().is_file() && regex.is_match(name) {
            let target = dest_dir.join(name);
            copy_file(&entry.path(), &target)?;
            copied.push(target);
        }
    }

    copied.sort();
    Ok(copied)
}
