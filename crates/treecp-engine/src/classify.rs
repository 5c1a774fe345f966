//! Path classification

use std::fs;
use std::path::Path;
use treecp_types::PathKind;

/// Classify `path` as missing, a regular file or a directory
///
/// Symbolic links are followed. Anything that exists and is not a directory
/// counts as a regular file. If the platform cannot tell (dangling link,
/// permission denied on a parent), the path is reported as missing and the
/// caller fails further down.
pub fn classify(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => PathKind::Directory,
        Ok(_) => PathKind::RegularFile,
        Err(_) => PathKind::Missing,
    }
}
