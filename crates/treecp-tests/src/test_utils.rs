//! Unified test utilities for treecp tests
//!
//! This module provides common utilities used across all test files
//! to ensure consistency and reduce code duplication.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use treecp_types::{CopyObserver, Error, ErrorKind};
use walkdir::WalkDir;

/// Test data generation patterns
#[derive(Debug, Clone, Copy)]
pub enum TestDataPattern {
    /// All zeros
    Zeros,
    /// Deterministic bytes with some structure, different per offset
    Realistic,
}

/// Generate test data with specified pattern
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Zeros => vec![0u8; size],
        TestDataPattern::Realistic => (0..size).map(|i| ((i * 7 + 13) % 256) as u8).collect(),
    }
}

/// Create a file below `root`, creating its parents first
pub fn create_test_file(
    root: &Path,
    relative: &str,
    size: usize,
    pattern: TestDataPattern,
) -> PathBuf {
    let file_path = root.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, generate_test_data(size, pattern)).expect("Failed to write test file");
    file_path
}

/// Build a tree below `root` from relative file paths and sizes plus empty directories
pub fn create_test_tree(root: &Path, files: &[(&str, usize)], empty_dirs: &[&str]) {
    fs::create_dir_all(root).expect("Failed to create tree root");
    for (relative, size) in files {
        create_test_file(root, relative, *size, TestDataPattern::Realistic);
    }
    for relative in empty_dirs {
        fs::create_dir_all(root.join(relative)).expect("Failed to create empty directory");
    }
}

/// One entry of a tree snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    /// A directory
    Dir,
    /// A file and its content
    File(Vec<u8>),
}

/// Every entry below `root`, keyed by relative path
///
/// Sorted, so two snapshots compare equal regardless of listing order.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, TreeEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.expect("Failed to walk tree");
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("Entry outside of root")
                .to_path_buf();
            let value = if entry.file_type().is_dir() {
                TreeEntry::Dir
            } else {
                TreeEntry::File(fs::read(entry.path()).expect("Failed to read file"))
            };
            (relative, value)
        })
        .collect()
}

/// Something the engine reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A file copy was attempted
    Started(PathBuf, PathBuf),
    /// A file copy finished
    Copied(PathBuf, u64),
    /// A destination directory was created
    DirectoryCreated(PathBuf),
    /// An empty source directory was left out
    EmptySkipped(PathBuf),
    /// A failure was recorded
    Failed(ErrorKind),
    /// A source was removed
    Deleted(PathBuf),
}

/// Observer that keeps every event in order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// Events in the order they were reported
    pub events: Vec<Event>,
}

impl RecordingObserver {
    /// Kinds of every reported failure
    pub fn failures(&self) -> Vec<ErrorKind> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Failed(kind) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    /// Number of file copy attempts
    pub fn attempts(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Started(..)))
            .count()
    }
}

impl CopyObserver for RecordingObserver {
    fn file_started(&mut self, source: &Path, destination: &Path) {
        self.events
            .push(Event::Started(source.to_path_buf(), destination.to_path_buf()));
    }

    fn file_copied(&mut self, _source: &Path, destination: &Path, bytes: u64) {
        self.events
            .push(Event::Copied(destination.to_path_buf(), bytes));
    }

    fn directory_created(&mut self, path: &Path) {
        self.events.push(Event::DirectoryCreated(path.to_path_buf()));
    }

    fn empty_directory_skipped(&mut self, path: &Path) {
        self.events.push(Event::EmptySkipped(path.to_path_buf()));
    }

    fn error(&mut self, error: &Error) {
        self.events.push(Event::Failed(error.kind()));
    }

    fn source_deleted(&mut self, path: &Path) {
        self.events.push(Event::Deleted(path.to_path_buf()));
    }
}
