//! Destination resolution for single file copies

use crate::classify::classify;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use treecp_types::{CopyPolicy, PathKind, ResolvedTarget};

/// Compute where `source` lands when copied to `requested`
///
/// - `requested` is an existing directory: the file goes inside it under its
///   own name.
/// - `requested` is missing and is either forced to be a directory by the
///   policy or spelled with a trailing separator: that directory is created
///   and the file goes inside it.
/// - `requested` is missing otherwise: it is the literal file path, and its
///   parent is created if absent.
/// - `requested` is an existing file: it is overwritten.
pub fn resolve(source: &Path, requested: &Path, policy: &CopyPolicy) -> ResolvedTarget {
    let target = match classify(requested) {
        PathKind::Directory => ResolvedTarget::existing(requested.join(basename(source))),
        PathKind::RegularFile => ResolvedTarget::existing(requested),
        PathKind::Missing => {
            if policy.destination_is_directory || ends_with_separator(requested) {
                ResolvedTarget::creating(requested, requested.join(basename(source)))
            } else {
                match requested.parent() {
                    // a bare file name lives in the current directory
                    Some(parent) if !parent.as_os_str().is_empty() && !classify(parent).exists() => {
                        ResolvedTarget::creating(parent, requested)
                    }
                    _ => ResolvedTarget::existing(requested),
                }
            }
        }
    };

    debug!(
        "Resolved {} -> {} (create: {:?})",
        source.display(),
        target.destination.display(),
        target.directory_to_create
    );
    target
}

/// Final name component of `path`, or the whole path when it has none
pub fn basename(path: &Path) -> &OsStr {
    path.file_name().unwrap_or_else(|| path.as_os_str())
}

/// Whether `path` is spelled with a trailing separator
///
/// Checked on the raw string, since [`Path`] drops trailing separators
/// when it splits components. A backslash only counts on Windows.
pub fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&byte| byte == b'/' || (cfg!(windows) && byte == b'\\'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scratch() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, b"a").unwrap();
        (temp_dir, source)
    }

    #[test]
    fn test_existing_directory_gets_basename() {
        let (temp_dir, source) = scratch();
        let out = temp_dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let target = resolve(&source, &out, &CopyPolicy::new());
        assert_eq!(target, ResolvedTarget::existing(out.join("a.txt")));
    }

    #[test]
    fn test_existing_file_is_overwritten_in_place() {
        let (temp_dir, source) = scratch();
        let existing = temp_dir.path().join("b.txt");
        fs::write(&existing, b"b").unwrap();

        let policy = CopyPolicy::new().with_destination_is_directory(true);
        let target = resolve(&source, &existing, &policy);
        assert_eq!(target, ResolvedTarget::existing(existing));
    }

    #[test]
    fn test_missing_destination_with_trailing_separator_is_a_directory() {
        let (temp_dir, source) = scratch();
        let out = temp_dir.path().join("out");
        let mut spelled = out.clone().into_os_string();
        spelled.push("/");
        let spelled = PathBuf::from(spelled);

        let target = resolve(&source, &spelled, &CopyPolicy::new());
        assert_eq!(target.directory_to_create.as_deref(), Some(spelled.as_path()));
        assert_eq!(target.destination, out.join("a.txt"));
    }

    #[test]
    fn test_missing_destination_forced_to_directory() {
        let (temp_dir, source) = scratch();
        let out = temp_dir.path().join("out");

        let policy = CopyPolicy::new().with_destination_is_directory(true);
        let target = resolve(&source, &out, &policy);
        assert_eq!(target, ResolvedTarget::creating(&out, out.join("a.txt")));
    }

    #[test]
    fn test_missing_destination_is_literal_file_path() {
        let (temp_dir, source) = scratch();
        let renamed = temp_dir.path().join("renamed.txt");

        let target = resolve(&source, &renamed, &CopyPolicy::new());
        assert_eq!(target, ResolvedTarget::existing(&renamed));
    }

    #[test]
    fn test_missing_parent_is_created() {
        let (temp_dir, source) = scratch();
        let parent = temp_dir.path().join("x").join("y");
        let renamed = parent.join("renamed.txt");

        let target = resolve(&source, &renamed, &CopyPolicy::new());
        assert_eq!(target, ResolvedTarget::creating(&parent, &renamed));
    }

    #[test]
    fn test_bare_file_name_needs_no_directory() {
        let (_temp_dir, source) = scratch();
        let target = resolve(&source, Path::new("treecp-resolve-bare.txt"), &CopyPolicy::new());
        assert_eq!(target.directory_to_create, None);
    }

    #[rstest]
    #[case("dir", false)]
    #[case("dir/", true)]
    #[case("a/b/", true)]
    #[case("/", true)]
    #[case("", false)]
    #[case("dir/file.txt", false)]
    fn test_ends_with_separator(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(ends_with_separator(Path::new(path)), expected);
    }

    #[cfg(windows)]
    #[test]
    fn test_backslash_is_a_separator_on_windows() {
        assert!(ends_with_separator(Path::new("dir\\")));
    }

    #[rstest]
    #[case("a/b.txt", "b.txt")]
    #[case("b.txt", "b.txt")]
    #[case("dir/", "dir")]
    #[case("..", "..")]
    fn test_basename(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(basename(Path::new(path)), OsStr::new(expected));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_any_file_lands_inside_existing_directory(name in "[a-z][a-z0-9_]{0,11}\\.txt") {
            let temp_dir = TempDir::new().unwrap();
            let source = temp_dir.path().join("src").join(&name);
            let out = temp_dir.path().join("out");
            fs::create_dir(&out).unwrap();

            let target = resolve(&source, &out, &CopyPolicy::new());
            prop_assert_eq!(target.destination, out.join(&name));
            prop_assert!(target.directory_to_create.is_none());
        }
    }
}
