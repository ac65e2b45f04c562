//! Collision-free name resolution.
//!
//! Notes:
//! - This only decides the name based on current filesystem state. The rename that
//!   follows refuses to replace an existing entry, so a name taken in between is
//!   reported as `AlreadyExists` rather than overwritten.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;
use tracing::trace;

use super::naming::format_name;

/// True if any entry (file, directory, symlink, even a dangling one) occupies `path`.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Return a filename inside `dir` that is free at the time of the check.
///
/// Tries `T_tag.E` first, then `T_1_tag.E`, `T_2_tag.E`, ... with no upper bound.
pub fn resolve_unique_name(
    dir: &Path,
    timestamp: &str,
    tag: Option<&str>,
    extension: &OsStr,
) -> OsString {
    resolve_unique_name_with(dir, timestamp, tag, extension, entry_exists)
}

/// Same as [`resolve_unique_name`] with a caller-supplied occupancy check.
pub fn resolve_unique_name_with<F>(
    dir: &Path,
    timestamp: &str,
    tag: Option<&str>,
    extension: &OsStr,
    mut is_taken: F,
) -> OsString
where
    F: FnMut(&Path) -> bool,
{
    let mut candidate = format_name(timestamp, extension, tag, None);
    let mut n: u64 = 1;
    while is_taken(&dir.join(&candidate)) {
        trace!(name = ?candidate, dir = %dir.display(), "name taken, trying next number");
        candidate = format_name(timestamp, extension, tag, Some(n));
        n = n.saturating_add(1);
    }
    candidate
}
