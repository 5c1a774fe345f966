//! Core data types for treecp
//!
//! Path classification, resolved copy targets, statistics and the per-source
//! outcome accumulator.

use crate::Error;
use std::path::{Path, PathBuf};

/// What a filesystem path was at the instant it was inspected
///
/// Never cached: a path can change between two checks, and whichever
/// operation runs into the inconsistency simply fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path (or its existence could not be determined)
    Missing,
    /// Exists and is not a directory
    RegularFile,
    /// Exists and is a directory
    Directory,
}

impl PathKind {
    /// Whether something exists at the path
    pub fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Whether the path is a directory
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Whether the path exists and is not a directory
    pub fn is_file(self) -> bool {
        matches!(self, Self::RegularFile)
    }
}

/// Where a single file copy will land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Directory that has to be created before copying, if any
    pub directory_to_create: Option<PathBuf>,
    /// Final path of the copied file
    pub destination: PathBuf,
}

impl ResolvedTarget {
    /// Target whose parent already exists
    pub fn existing(destination: impl Into<PathBuf>) -> Self {
        Self {
            directory_to_create: None,
            destination: destination.into(),
        }
    }

    /// Target that needs `directory` created first
    pub fn creating(directory: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            directory_to_create: Some(directory.into()),
            destination: destination.into(),
        }
    }

    /// Final destination path
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Counters for one copy operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of directories created
    pub directories_created: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Number of empty source directories left out
    pub empty_dirs_skipped: u64,
    /// Number of errors encountered
    pub errors: u64,
}

impl CopyStats {
    /// Create a new empty statistics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge statistics from another instance
    pub fn merge(&mut self, other: &CopyStats) {
        self.files_copied += other.files_copied;
        self.directories_created += other.directories_created;
        self.bytes_copied += other.bytes_copied;
        self.empty_dirs_skipped += other.empty_dirs_skipped;
        self.errors += other.errors;
    }
}

/// Result accumulator for one top-level source
///
/// Each recursion level builds its own outcome and merges it into its
/// parent's, so once any level records an error the top-level outcome
/// reports [`had_error`](Self::had_error) for good. Source deletion is only
/// allowed when it does not.
#[derive(Debug, Default)]
pub struct CopyOutcome {
    stats: CopyStats,
    errors: Vec<Error>,
}

impl CopyOutcome {
    /// Create an empty, successful outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any copy failure was recorded anywhere in the subtree
    ///
    /// Failures that do not fail a copy (see [`Error::fails_copy`]) are kept
    /// in [`errors`](Self::errors) but do not count here.
    pub fn had_error(&self) -> bool {
        self.errors.iter().any(Error::fails_copy)
    }

    /// Record a failure
    pub fn record_error(&mut self, error: Error) {
        self.stats.errors += 1;
        self.errors.push(error);
    }

    /// Record a copied file of `bytes` bytes
    pub fn record_file_copied(&mut self, bytes: u64) {
        self.stats.files_copied += 1;
        self.stats.bytes_copied += bytes;
    }

    /// Record a newly created destination directory
    pub fn record_directory_created(&mut self) {
        self.stats.directories_created += 1;
    }

    /// Record an empty source directory that was left out
    pub fn record_empty_dir_skipped(&mut self) {
        self.stats.empty_dirs_skipped += 1;
    }

    /// Fold a child outcome into this one
    pub fn merge(&mut self, other: CopyOutcome) {
        self.stats.merge(&other.stats);
        self.errors.extend(other.errors);
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &CopyStats {
        &self.stats
    }

    /// Every recorded failure, in the order they happened
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_kind_predicates() {
        assert!(!PathKind::Missing.exists());
        assert!(PathKind::RegularFile.exists());
        assert!(PathKind::RegularFile.is_file());
        assert!(!PathKind::RegularFile.is_dir());
        assert!(PathKind::Directory.is_dir());
        assert!(!PathKind::Directory.is_file());
    }

    #[test]
    fn test_resolved_target_constructors() {
        let target = ResolvedTarget::existing("out/a.txt");
        assert_eq!(target.directory_to_create, None);
        assert_eq!(target.destination(), Path::new("out/a.txt"));

        let target = ResolvedTarget::creating("out", "out/a.txt");
        assert_eq!(target.directory_to_create, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_outcome_starts_clean() {
        let outcome = CopyOutcome::new();
        assert!(!outcome.had_error());
        assert_eq!(*outcome.stats(), CopyStats::new());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn test_outcome_error_survives_merge() {
        let mut parent = CopyOutcome::new();
        parent.record_file_copied(10);

        let mut failed_child = CopyOutcome::new();
        failed_child.record_error(Error::source_missing("gone.txt"));

        let mut clean_child = CopyOutcome::new();
        clean_child.record_file_copied(5);
        clean_child.record_directory_created();

        parent.merge(failed_child);
        parent.merge(clean_child);

        assert!(parent.had_error());
        assert_eq!(parent.stats().files_copied, 2);
        assert_eq!(parent.stats().bytes_copied, 15);
        assert_eq!(parent.stats().directories_created, 1);
        assert_eq!(parent.stats().errors, 1);
        assert_eq!(parent.errors().len(), 1);
    }

    #[test]
    fn test_delete_failure_does_not_mark_outcome_failed() {
        let mut outcome = CopyOutcome::new();
        outcome.record_file_copied(3);
        outcome.record_error(Error::source_delete(
            "a.txt",
            std::io::Error::from_raw_os_error(13),
        ));

        assert!(!outcome.had_error());
        assert_eq!(outcome.errors().len(), 1);

        outcome.record_error(Error::source_missing("b.txt"));
        assert!(outcome.had_error());
    }

    #[test]
    fn test_copy_stats_merge() {
        let mut stats1 = CopyStats::new();
        stats1.files_copied = 5;
        stats1.bytes_copied = 1000;

        let mut stats2 = CopyStats::new();
        stats2.files_copied = 3;
        stats2.bytes_copied = 500;
        stats2.empty_dirs_skipped = 2;

        stats1.merge(&stats2);
        assert_eq!(stats1.files_copied, 8);
        assert_eq!(stats1.bytes_copied, 1500);
        assert_eq!(stats1.empty_dirs_skipped, 2);
    }
}
