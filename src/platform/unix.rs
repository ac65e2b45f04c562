//! Unix implementations of platform helpers.

use std::ffi::CString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions to avoid
/// clobbering administrator adjustments (e.g. group-readable for log shipping).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

/// Rename `src` to `dst` atomically, failing with `AlreadyExists` instead of
/// replacing an existing `dst`.
///
/// Uses the kernel's no-replace rename where available. Filesystems that reject
/// the flag fall back to an existence check followed by a plain rename.
pub fn rename_noreplace(src: &Path, dst: &Path) -> io::Result<()> {
    match native_rename_noreplace(src, dst) {
        Err(e) if e.kind() == io::ErrorKind::Unsupported => super::guarded_rename(src, dst),
        other => other,
    }
}

/// fsync a directory so a completed rename survives a crash.
pub fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = File::open(dir)?;
    f.sync_all()
}

fn c_path(p: &Path) -> io::Result<CString> {
    CString::new(p.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains null byte"))
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn native_rename_noreplace(src: &Path, dst: &Path) -> io::Result<()> {
    let c_src = c_path(src)?;
    let c_dst = c_path(dst)?;
    let rc = unsafe {
        libc::renameat2(
            libc::AT_FDCWD,
            c_src.as_ptr(),
            libc::AT_FDCWD,
            c_dst.as_ptr(),
            libc::RENAME_NOREPLACE as libc::c_uint,
        )
    };
    if rc == 0 {
        return Ok(());
    }
    let err = io::Error::last_os_error();
    match err.raw_os_error() {
        // Kernel or filesystem without RENAME_NOREPLACE support.
        Some(libc::EINVAL) | Some(libc::ENOSYS) | Some(libc::EOPNOTSUPP) => {
            Err(io::Error::new(io::ErrorKind::Unsupported, err))
        }
        _ => Err(err),
    }
}

#[cfg(target_os = "macos")]
fn native_rename_noreplace(src: &Path, dst: &Path) -> io::Result<()> {
    let c_src = c_path(src)?;
    let c_dst = c_path(dst)?;
    let rc = unsafe { libc::renamex_np(c_src.as_ptr(), c_dst.as_ptr(), libc::RENAME_EXCL as libc::c_uint) };
    if rc == 0 {
        return Ok(());
    }
    let err = io::Error::last_os_error();
    match err.raw_os_error() {
        Some(libc::ENOTSUP) | Some(libc::EINVAL) => {
            Err(io::Error::new(io::ErrorKind::Unsupported, err))
        }
        _ => Err(err),
    }
}

#[cfg(not(any(all(target_os = "linux", target_env = "gnu"), target_os = "macos")))]
fn native_rename_noreplace(src: &Path, dst: &Path) -> io::Result<()> {
    // Validate paths the same way the native variants do.
    c_path(src)?;
    c_path(dst)?;
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no-replace rename not available on this platform",
    ))
}
