//! Core type system and error handling for treecp
//!
//! This crate provides the shared vocabulary of the treecp workspace:
//!
//! - **Error handling**: one structured [`Error`] per failure class, each carrying
//!   the offending path and the platform error
//! - **Configuration**: the immutable [`CopyPolicy`] built from command line flags
//! - **Core types**: [`PathKind`], [`ResolvedTarget`], [`CopyStats`] and the
//!   per-source [`CopyOutcome`] accumulator
//! - **Traits**: the [`CopyObserver`] seam between the engine and its front end
//!
//! # Examples
//!
//! ```rust
//! use treecp_types::{CopyOutcome, CopyPolicy, Error};
//!
//! let policy = CopyPolicy::new().with_delete_source(true);
//! let mut outcome = CopyOutcome::new();
//! outcome.record_error(Error::source_missing("missing.txt"));
//!
//! // a failed copy never deletes its source
//! assert!(policy.is_move() && outcome.had_error());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::CopyPolicy;
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use traits::{CopyObserver, NullObserver};
pub use types::{CopyOutcome, CopyStats, PathKind, ResolvedTarget};
