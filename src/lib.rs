//! Core library for `stamp_rename`.
//!
//! Renames every regular file directly inside a directory to
//! `YYYYMMDD_HHMMSS[_N][_tag].ext`, using the file's last-modified time in UTC.
//! `N` is a disambiguation number added only when the plain name is taken.
//!
//! ```no_run
//! use stamp_rename::{Config, rename_by_timestamp};
//!
//! let cfg = Config::new("/srv/photos/inbox", Some("holiday"));
//! let report = rename_by_timestamp(&cfg)?;
//! assert_eq!(report.lost(), 0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The directory must not be renamed into by another process while a run is in
//! progress. Renames never overwrite, but a busy directory costs extra name
//! lookups and the before/after entry counts will disagree.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;

pub use config::{Config, LogLevel, path_has_symlink_ancestor, validate_and_normalize};
pub use errors::RenameError;
pub use fs_ops::{
    RenameEvent, RenameReport, count_entries, format_name, rename_by_timestamp,
    rename_by_timestamp_with, resolve_unique_name,
};

/// Common imports for callers embedding the engine.
pub mod prelude {
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::RenameError;
    pub use crate::fs_ops::{RenameEvent, RenameReport, rename_by_timestamp, rename_by_timestamp_with};
}
