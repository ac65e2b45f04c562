//! I/O helper utilities.
//!
//! Provides small adapters to enrich io::Error with actionable context/hints,
//! usable with map_err in anyhow::Result code paths.
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::metadata(p).map_err(io_error_with_help("stat file", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

use crate::errors::RenameError;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions.");
                }
                libc::EXDEV => {
                    msg.push_str("; cross-filesystem, atomic rename not possible.");
                }
                libc::EBUSY => {
                    msg.push_str("; resource busy, ensure no other process is using it.");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, it may have been moved during the run.");
                }
                libc::EEXIST => {
                    msg.push_str("; already exists, pick a unique name.");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem, cannot rename here.");
                }
                libc::ELOOP => {
                    msg.push_str("; too many symbolic link levels (ELOOP), possible symlink cycle.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; filename or path too long, use a shorter tag.");
                }
                libc::EMFILE => {
                    msg.push_str("; process file descriptor limit reached.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions."),
                17 => msg.push_str("; not same device, cross-filesystem rename."),
                32 => msg.push_str("; sharing violation, file is in use."),
                2 | 3 => msg.push_str("; path not found, verify it exists."),
                80 | 183 => msg.push_str("; already exists, pick a unique name."),
                19 => msg.push_str("; write protected / read-only media."),
                206 => msg.push_str("; filename or path too long, use a shorter tag."),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found, verify it exists.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str("; already exists, pick a unique name.");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
///
/// Permission failures become [`RenameError::PermissionDenied`] so callers can
/// downcast them.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let msg = build_message(op, path, &e);
        if e.kind() == io::ErrorKind::PermissionDenied {
            RenameError::PermissionDenied {
                path: path.to_path_buf(),
                context: msg,
            }
            .into()
        } else {
            anyhow!(msg)
        }
    }
}

/// Convert a walkdir error into the same shape as [`io_error_with_help`].
pub(super) fn walkdir_error(op: &str, dir: &Path, e: walkdir::Error) -> anyhow::Error {
    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
    match e.into_io_error() {
        Some(ioe) => io_error_with_help(op, &path)(ioe),
        None => anyhow!("{} '{}': filesystem loop detected", op, path.display()),
    }
}
