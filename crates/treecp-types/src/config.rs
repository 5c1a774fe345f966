//! Copy policy configuration
//!
//! A [`CopyPolicy`] is built once from the parsed command line and read, never
//! written, for the rest of the run.

/// Behaviour toggles for one treecp run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyPolicy {
    /// Clear the read-only attribute of existing destination files before overwriting
    pub force_overwrite: bool,
    /// Do not create destination directories for empty source directories
    pub skip_empty_dirs: bool,
    /// Treat a missing destination as a directory even without a trailing separator
    pub destination_is_directory: bool,
    /// Delete each source after it was copied without any error
    pub delete_source: bool,
}

impl CopyPolicy {
    /// Create a policy with every toggle off (plain recursive copy)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable read-only override
    pub fn with_force_overwrite(mut self, enabled: bool) -> Self {
        self.force_overwrite = enabled;
        self
    }

    /// Enable or disable empty directory skipping
    pub fn with_skip_empty_dirs(mut self, enabled: bool) -> Self {
        self.skip_empty_dirs = enabled;
        self
    }

    /// Force the destination to be treated as a directory
    pub fn with_destination_is_directory(mut self, enabled: bool) -> Self {
        self.destination_is_directory = enabled;
        self
    }

    /// Enable or disable source deletion after a clean copy
    pub fn with_delete_source(mut self, enabled: bool) -> Self {
        self.delete_source = enabled;
        self
    }

    /// Whether the run has move semantics
    pub fn is_move(&self) -> bool {
        self.delete_source
    }
}
