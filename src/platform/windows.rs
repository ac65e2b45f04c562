//! Windows implementations of platform helpers (best-effort, minimal ACL awareness).
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; we do not attempt ACL management here.
//! - MoveFileExW without MOVEFILE_REPLACE_EXISTING refuses to overwrite.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows_sys::Win32::Storage::FileSystem::MoveFileExW;

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Rename `src` to `dst`, failing with `AlreadyExists` instead of replacing `dst`.
pub fn rename_noreplace(src: &Path, dst: &Path) -> io::Result<()> {
    let w_src = wide(src);
    let w_dst = wide(dst);
    // Flags 0: same-volume move, never replace an existing destination.
    let ok = unsafe { MoveFileExW(w_src.as_ptr(), w_dst.as_ptr(), 0) };
    if ok != 0 {
        Ok(())
    } else {
        // ERROR_ALREADY_EXISTS / ERROR_FILE_EXISTS map to io::ErrorKind::AlreadyExists.
        Err(io::Error::last_os_error())
    }
}

/// No-op on Windows; directory fsync is not supported via std.
pub fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

fn wide(p: &Path) -> Vec<u16> {
    p.as_os_str().encode_wide().chain(std::iter::once(0)).collect()
}
