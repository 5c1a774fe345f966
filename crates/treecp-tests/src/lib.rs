//! treecp testing suite
//!
//! Integration tests for the treecp engine plus the fixtures they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
///
/// Tree builders, snapshots and a recording observer used across the
/// integration tests.
pub mod test_utils;
