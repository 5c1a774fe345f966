//! Result type alias for treecp operations

use crate::Error;

/// Result type alias for treecp operations
pub type Result<T> = std::result::Result<T, Error>;
