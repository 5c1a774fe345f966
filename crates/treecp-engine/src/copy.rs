//! Recursive copy engine
//!
//! [`copy_item`] classifies a source and either copies it as a single file or
//! walks it as a directory. Every level returns its own [`CopyOutcome`] which
//! the caller merges, so a failure anywhere in a subtree reaches the top.
//! Failures never stop the walk: siblings of a failed item are still copied.

use crate::classify::classify;
use crate::readonly::override_read_only;
use crate::resolve::{ends_with_separator, resolve};
use filetime::FileTime;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use treecp_types::{CopyObserver, CopyOutcome, CopyPolicy, Error, PathKind, Result};

/// Copy `source` (file or directory tree) to `destination`
pub fn copy_item(
    source: &Path,
    destination: &Path,
    policy: &CopyPolicy,
    observer: &mut dyn CopyObserver,
) -> CopyOutcome {
    let kind = classify(source);
    debug!("Classified {} as {:?}", source.display(), kind);

    match kind {
        PathKind::Missing => {
            let mut outcome = CopyOutcome::new();
            fail(&mut outcome, observer, Error::source_missing(source));
            outcome
        }
        PathKind::RegularFile => copy_file(source, destination, policy, observer),
        PathKind::Directory => copy_dir(source, destination, policy, observer),
    }
}

fn copy_file(
    source: &Path,
    destination: &Path,
    policy: &CopyPolicy,
    observer: &mut dyn CopyObserver,
) -> CopyOutcome {
    let mut outcome = CopyOutcome::new();
    let target = resolve(source, destination, policy);

    if let Some(directory) = &target.directory_to_create {
        match create_directory(directory) {
            Ok(()) => {
                outcome.record_directory_created();
                observer.directory_created(directory);
            }
            Err(e) => {
                fail(&mut outcome, observer, e);
                return outcome;
            }
        }
    }

    let destination = target.destination();
    if classify(destination).is_file() {
        if let Err(e) = override_read_only(destination, policy) {
            // the copy below reports the real failure if the file stays locked
            warn!(
                "Failed to clear read-only flag on {}: {}",
                destination.display(),
                e
            );
        }
    }

    observer.file_started(source, destination);
    match copy_file_with_metadata(source, destination) {
        Ok(bytes) => {
            outcome.record_file_copied(bytes);
            observer.file_copied(source, destination, bytes);
        }
        Err(e) => fail(&mut outcome, observer, e),
    }

    outcome
}

fn copy_dir(
    source: &Path,
    destination: &Path,
    policy: &CopyPolicy,
    observer: &mut dyn CopyObserver,
) -> CopyOutcome {
    let mut outcome = CopyOutcome::new();

    let entries = match list_entries(source) {
        Ok(entries) => entries,
        Err(e) => {
            fail(&mut outcome, observer, e);
            return outcome;
        }
    };

    if policy.skip_empty_dirs && entries.is_empty() {
        debug!("Skipping empty directory {}", source.display());
        outcome.record_empty_dir_skipped();
        observer.empty_directory_skipped(source);
        return outcome;
    }

    let target = match directory_name(source) {
        Some(name) => destination.join(name),
        None => destination.to_path_buf(),
    };

    if !classify(&target).exists() {
        if let Err(e) = create_directory(&target) {
            fail(&mut outcome, observer, e);
            return outcome;
        }
        outcome.record_directory_created();
        observer.directory_created(&target);
    }

    for entry in entries {
        outcome.merge(copy_item(&entry, &target, policy, observer));
    }

    outcome
}

/// Name a source directory keeps under the destination
///
/// `None` means "copy the contents straight into the destination": the
/// source was spelled with a trailing separator, or has no name of its own
/// (`.`, `..`, a root).
fn directory_name(source: &Path) -> Option<&OsStr> {
    if ends_with_separator(source) {
        return None;
    }
    source.file_name()
}

fn list_entries(directory: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(directory)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|entry| entry.path()))
                .collect::<io::Result<Vec<_>>>()
        })
        .map_err(|e| Error::directory_read(directory, e))
}

/// Create `directory` and any missing parents
pub fn create_directory(directory: &Path) -> Result<()> {
    debug!("Creating directory {}", directory.display());
    fs::create_dir_all(directory).map_err(|e| Error::directory_create(directory, e))
}

/// Copy file content and attributes from `source` to `destination`
///
/// Content and permission bits come across with [`fs::copy`]; access and
/// modification times are restored afterwards. Returns the number of bytes
/// copied. A failure can leave a partially written destination behind.
///
/// Copying a file onto itself is refused with [`io::ErrorKind::InvalidInput`]
/// and leaves the file untouched.
pub fn copy_file_with_metadata(source: &Path, destination: &Path) -> Result<u64> {
    let to_error = |e: io::Error| Error::file_copy(source, destination, e);

    if same_file(source, destination) {
        return Err(to_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )));
    }

    let bytes = fs::copy(source, destination).map_err(to_error)?;

    let metadata = fs::metadata(source).map_err(to_error)?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(destination, accessed, modified).map_err(to_error)?;

    Ok(bytes)
}

/// Whether both paths name the same existing file, through links or not
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn fail(outcome: &mut CopyOutcome, observer: &mut dyn CopyObserver, error: Error) {
    debug!("Recording failure: {}", error);
    observer.error(&error);
    outcome.record_error(error);
}
