//! Multi-source copy driver

use crate::copy::copy_item;
use crate::finalize::finalize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use treecp_types::{CopyObserver, CopyOutcome, CopyPolicy, Error};

/// What happened to one source argument
#[derive(Debug)]
pub struct SourceReport {
    /// The source as given
    pub source: PathBuf,
    /// Copy statistics and every copy failure in its subtree
    pub outcome: CopyOutcome,
    /// Whether the source was removed afterwards
    pub deleted: bool,
    /// Why removing the source failed, if it did
    pub delete_error: Option<Error>,
}

impl SourceReport {
    /// Whether the copy itself went through without any failure
    pub fn succeeded(&self) -> bool {
        !self.outcome.had_error()
    }
}

/// Copies sources to a destination under one [`CopyPolicy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Copier {
    policy: CopyPolicy,
}

impl Copier {
    /// Create a copier for `policy`
    pub fn new(policy: CopyPolicy) -> Self {
        Self { policy }
    }

    /// The policy this copier applies
    pub fn policy(&self) -> &CopyPolicy {
        &self.policy
    }

    /// Copy one source, then remove it if the policy and the outcome allow
    pub fn copy(
        &self,
        source: &Path,
        destination: &Path,
        observer: &mut dyn CopyObserver,
    ) -> SourceReport {
        info!("Copying {} to {}", source.display(), destination.display());

        let outcome = copy_item(source, destination, &self.policy, observer);
        let (deleted, delete_error) = match finalize(source, &outcome, &self.policy, observer) {
            Ok(deleted) => (deleted, None),
            Err(e) => {
                debug!("Recording failure: {}", e);
                observer.error(&e);
                (false, Some(e))
            }
        };

        info!(
            "Finished {}: {} file(s), {} error(s)",
            source.display(),
            outcome.stats().files_copied,
            outcome.stats().errors
        );

        SourceReport {
            source: source.to_path_buf(),
            outcome,
            deleted,
            delete_error,
        }
    }

    /// Copy every source to `destination`, in order
    ///
    /// With more than one source the destination is always a directory, so
    /// each source lands under it by its own name. A later source with the
    /// same name overwrites an earlier one.
    pub fn copy_all<P: AsRef<Path>>(
        &self,
        sources: &[P],
        destination: &Path,
        observer: &mut dyn CopyObserver,
    ) -> Vec<SourceReport> {
        let copier = if sources.len() > 1 {
            Self::new(self.policy.with_destination_is_directory(true))
        } else {
            *self
        };

        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            reports.push(copier.copy(source.as_ref(), destination, observer));
        }
        reports
    }
}
