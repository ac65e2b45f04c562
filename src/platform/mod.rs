//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{fsync_dir, open_log_file_secure_append, rename_noreplace};

#[cfg(windows)]
pub use windows::{fsync_dir, open_log_file_secure_append, rename_noreplace};

/// Portable no-replace rename: refuse if `dst` is occupied, else plain rename.
///
/// The check and the rename are two steps; used only where the OS offers no
/// single-call equivalent.
#[cfg_attr(windows, allow(dead_code))]
pub(crate) fn guarded_rename(src: &Path, dst: &Path) -> io::Result<()> {
    if fs::symlink_metadata(dst).is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: {}", dst.display()),
        ));
    }
    fs::rename(src, dst)
}
