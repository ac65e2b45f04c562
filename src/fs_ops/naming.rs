//! Timestamp-based name generation.
//!
//! Layout of a generated name:
//! - `T.E` with no tag and no number
//! - `T_tag.E` with a tag
//! - `T_N.E` with a disambiguation number and no tag
//! - `T_N_tag.E` with both
//!
//! `T` is the UTC modified time as `YYYYMMDD_HHMMSS`; `E` is the original
//! extension, byte-for-byte.

use chrono::{DateTime, Utc};
use std::ffi::{OsStr, OsString};
use std::time::SystemTime;

/// chrono format for the timestamp component of a generated name.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format a modification time as `YYYYMMDD_HHMMSS` in UTC.
pub fn timestamp_string(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

/// Build a candidate filename. Pure: no filesystem access.
///
/// An empty tag is treated the same as no tag, so no dangling separator appears.
pub fn format_name(
    timestamp: &str,
    extension: &OsStr,
    tag: Option<&str>,
    number: Option<u64>,
) -> OsString {
    let mut name = OsString::from(timestamp);
    if let Some(n) = number {
        name.push(format!("_{n}"));
    }
    if let Some(t) = tag.filter(|t| !t.is_empty()) {
        name.push("_");
        name.push(t);
    }
    name.push(".");
    name.push(extension);
    name
}

/// Extension of `file_name`: everything after the final `.`.
///
/// A name without any `.` yields the whole name ("README" -> "README").
#[cfg(unix)]
pub fn extension_of(file_name: &OsStr) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    let bytes = file_name.as_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(i) => OsStr::from_bytes(&bytes[i + 1..]).to_os_string(),
        None => file_name.to_os_string(),
    }
}

/// Extension of `file_name`: everything after the final `.`.
///
/// A name without any `.` yields the whole name ("README" -> "README").
#[cfg(not(unix))]
pub fn extension_of(file_name: &OsStr) -> OsString {
    match file_name.to_str() {
        Some(s) => match s.rsplit_once('.') {
            Some((_, ext)) => OsString::from(ext),
            None => file_name.to_os_string(),
        },
        // Best-effort for unpaired surrogates on Windows.
        None => {
            let lossy = file_name.to_string_lossy();
            match lossy.rsplit_once('.') {
                Some((_, ext)) => OsString::from(ext),
                None => file_name.to_os_string(),
            }
        }
    }
}
