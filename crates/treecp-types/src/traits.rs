//! Core traits for treecp operations
//!
//! The copy engine never prints. It reports what it does through a
//! [`CopyObserver`], and the front end decides how to render it.

use crate::Error;
use std::path::Path;

/// Receives events while a copy runs
///
/// Every method has an empty default, so implementors only override what
/// they display.
pub trait CopyObserver {
    /// A file copy is about to be attempted
    fn file_started(&mut self, _source: &Path, _destination: &Path) {}

    /// A file was copied completely
    fn file_copied(&mut self, _source: &Path, _destination: &Path, _bytes: u64) {}

    /// A destination directory was created
    fn directory_created(&mut self, _path: &Path) {}

    /// An empty source directory was left out
    fn empty_directory_skipped(&mut self, _path: &Path) {}

    /// A failure was recorded
    fn error(&mut self, _error: &Error) {}

    /// A source was removed after a clean copy
    fn source_deleted(&mut self, _path: &Path) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CopyObserver for NullObserver {}
