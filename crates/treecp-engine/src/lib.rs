//! Recursive copy engine for treecp
//!
//! This crate copies files and directory trees under a [`CopyPolicy`]:
//!
//! - **Classification**: [`classify`] tells missing paths, files and directories apart
//! - **Destination resolution**: [`resolve`] decides where a file lands and which
//!   directory has to exist first
//! - **Read-only override**: [`override_read_only`] unlocks existing targets on request
//! - **Recursive copy**: [`copy_item`] walks a source and accumulates one
//!   [`CopyOutcome`](treecp_types::CopyOutcome) per top-level source
//! - **Move semantics**: [`finalize`] removes a source only after a clean copy
//!
//! [`Copier`] ties these together for a list of sources.
//!
//! # Examples
//!
//! ```rust
//! use std::path::Path;
//! use treecp_engine::Copier;
//! use treecp_types::{CopyPolicy, ErrorKind, NullObserver};
//!
//! let copier = Copier::new(CopyPolicy::new());
//! let report = copier.copy(
//!     Path::new("does-not-exist.txt"),
//!     Path::new("out"),
//!     &mut NullObserver,
//! );
//! assert!(!report.succeeded());
//! assert_eq!(report.outcome.errors()[0].kind(), ErrorKind::SourceMissing);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod copy;
pub mod engine;
pub mod finalize;
pub mod readonly;
pub mod resolve;

pub use classify::classify;
pub use copy::{copy_file_with_metadata, copy_item, create_directory};
pub use engine::{Copier, SourceReport};
pub use finalize::finalize;
pub use readonly::{clear_read_only, override_read_only};
pub use resolve::{basename, ends_with_separator, resolve};
