//! Error types and handling for treecp
//!
//! Every failure the engine can hit is a variant of [`Error`] carrying the
//! offending path and, where the platform produced one, the underlying
//! [`std::io::Error`]. Only the command line front end turns these into text.

use std::io;
use std::path::{Path, PathBuf};

/// Main error type for treecp operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The command line could not be turned into a copy request
    #[error("Invalid invocation: {message}")]
    InvalidInvocation {
        /// What was wrong with the arguments
        message: String,
    },

    /// A source path did not exist when it was classified
    #[error("Source path \"{}\" does not exist", path.display())]
    SourceMissing {
        /// The missing source
        path: PathBuf,
    },

    /// A destination directory could not be created
    #[error("Cannot create directory '{}': {source}", path.display())]
    DirectoryCreateFailed {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying platform error
        source: io::Error,
    },

    /// The entries of a source directory could not be listed
    #[error("Cannot read directory '{}': {source}", path.display())]
    DirectoryReadFailed {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying platform error
        source: io::Error,
    },

    /// Copying one file (content or attributes) failed
    #[error(
        "Cannot copy '{}' to '{}': {source}",
        source_path.display(),
        destination.display()
    )]
    FileCopyFailed {
        /// File being copied
        source_path: PathBuf,
        /// Where it was being copied to
        destination: PathBuf,
        /// Underlying platform error
        source: io::Error,
    },

    /// The source could not be removed after a successful copy
    #[error("Cannot delete source '{}': {source}", path.display())]
    SourceDeleteFailed {
        /// Source that was being removed
        path: PathBuf,
        /// Underlying platform error
        source: io::Error,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or insufficient arguments
    InvalidInvocation,
    /// Source path missing
    SourceMissing,
    /// Destination directory creation
    DirectoryCreate,
    /// Source directory listing
    DirectoryRead,
    /// Single file copy
    FileCopy,
    /// Source removal after a move
    SourceDelete,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInvocation { .. } => ErrorKind::InvalidInvocation,
            Self::SourceMissing { .. } => ErrorKind::SourceMissing,
            Self::DirectoryCreateFailed { .. } => ErrorKind::DirectoryCreate,
            Self::DirectoryReadFailed { .. } => ErrorKind::DirectoryRead,
            Self::FileCopyFailed { .. } => ErrorKind::FileCopy,
            Self::SourceDeleteFailed { .. } => ErrorKind::SourceDelete,
        }
    }

    /// The path the failure is about, if any
    ///
    /// For [`Error::FileCopyFailed`] this is the destination, since that is
    /// where the platform reports most copy failures.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidInvocation { .. } => None,
            Self::SourceMissing { path }
            | Self::DirectoryCreateFailed { path, .. }
            | Self::DirectoryReadFailed { path, .. }
            | Self::SourceDeleteFailed { path, .. } => Some(path),
            Self::FileCopyFailed { destination, .. } => Some(destination),
        }
    }

    /// The underlying platform error, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::InvalidInvocation { .. } | Self::SourceMissing { .. } => None,
            Self::DirectoryCreateFailed { source, .. }
            | Self::DirectoryReadFailed { source, .. }
            | Self::FileCopyFailed { source, .. }
            | Self::SourceDeleteFailed { source, .. } => Some(source),
        }
    }

    /// Platform error number, when the failure came from the OS
    pub fn os_code(&self) -> Option<i32> {
        self.io_error().and_then(io::Error::raw_os_error)
    }

    /// Whether this error marks a copy outcome as failed
    ///
    /// A failed source deletion happens after the copy is complete and never
    /// counts against it.
    pub fn fails_copy(&self) -> bool {
        !matches!(
            self,
            Self::InvalidInvocation { .. } | Self::SourceDeleteFailed { .. }
        )
    }

    /// Create a new invalid invocation error
    pub fn invalid_invocation<S: Into<String>>(message: S) -> Self {
        Self::InvalidInvocation {
            message: message.into(),
        }
    }

    /// Create a new missing source error
    pub fn source_missing<P: Into<PathBuf>>(path: P) -> Self {
        Self::SourceMissing { path: path.into() }
    }

    /// Create a new directory creation error
    pub fn directory_create<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::DirectoryCreateFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a new directory listing error
    pub fn directory_read<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::DirectoryReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a new file copy error
    pub fn file_copy<P: Into<PathBuf>, Q: Into<PathBuf>>(
        source_path: P,
        destination: Q,
        source: io::Error,
    ) -> Self {
        Self::FileCopyFailed {
            source_path: source_path.into(),
            destination: destination.into(),
            source,
        }
    }

    /// Create a new source deletion error
    pub fn source_delete<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::SourceDeleteFailed {
            path: path.into(),
            source,
        }
    }
}
