//! Atomic no-clobber rename helper.
//! - Never replaces an existing destination; that case surfaces as `AlreadyExists`.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::io;
use std::path::Path;

use crate::platform::{fsync_dir, rename_noreplace};

/// Rename `src` to `dst` in one step, refusing to overwrite.
pub fn try_atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    rename_noreplace(src, dst)?;

    // Ignore fsync errors to avoid turning a successful rename into a failure.
    if let Some(parent) = dst.parent() {
        let _ = fsync_dir(parent);
    }
    Ok(())
}
