//! Read-only override for destination files

use std::fs::{self, Permissions};
use std::io;
use std::path::Path;
use tracing::debug;
use treecp_types::CopyPolicy;

/// Make an existing destination file writable when the policy allows it
///
/// Returns whether the attribute was actually cleared. With force-overwrite
/// off this does nothing and does not even inspect the file.
pub fn override_read_only(path: &Path, policy: &CopyPolicy) -> io::Result<bool> {
    if !policy.force_overwrite {
        return Ok(false);
    }
    clear_read_only(path)
}

/// Clear the read-only attribute of `path` if it is set
pub fn clear_read_only(path: &Path) -> io::Result<bool> {
    let mut permissions = fs::metadata(path)?.permissions();
    if !make_writable(&mut permissions) {
        return Ok(false);
    }

    fs::set_permissions(path, permissions)?;
    debug!("Cleared read-only flag on {}", path.display());
    Ok(true)
}

#[cfg(unix)]
fn make_writable(permissions: &mut Permissions) -> bool {
    use std::os::unix::fs::PermissionsExt;

    const OWNER_WRITE: u32 = 0o200;

    let mode = permissions.mode();
    if mode & OWNER_WRITE != 0 {
        return false;
    }
    permissions.set_mode(mode | OWNER_WRITE);
    true
}

#[cfg(not(unix))]
fn make_writable(permissions: &mut Permissions) -> bool {
    if !permissions.readonly() {
        return false;
    }
    permissions.set_readonly(false);
    true
}
