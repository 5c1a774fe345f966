//! Move finalization: source removal after a clean copy

use crate::classify::classify;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use treecp_types::{CopyObserver, CopyOutcome, CopyPolicy, Error, Result};

/// Delete `source` if the policy asks for it and its copy had no error
///
/// Returns whether the source was removed. A directory goes with its whole
/// tree. A failed removal is returned as [`Error::SourceDeleteFailed`] and
/// leaves the finished copy alone.
pub fn finalize(
    source: &Path,
    outcome: &CopyOutcome,
    policy: &CopyPolicy,
    observer: &mut dyn CopyObserver,
) -> Result<bool> {
    if !policy.is_move() {
        return Ok(false);
    }
    if outcome.had_error() {
        info!(
            "Keeping {}: {} error(s) during copy",
            source.display(),
            outcome.stats().errors
        );
        return Ok(false);
    }

    debug!("Deleting source {}", source.display());
    let removed = if classify(source).is_dir() {
        fs::remove_dir_all(source)
    } else {
        fs::remove_file(source)
    };
    removed.map_err(|e| Error::source_delete(source, e))?;

    observer.source_deleted(source);
    Ok(true)
}
