//! Filesystem operations: modularized.

mod atomic;
mod engine;
mod helpers;
mod inventory;
mod naming;
mod unique;

pub use atomic::try_atomic_rename;
pub use engine::{RenameEvent, RenameReport, rename_by_timestamp, rename_by_timestamp_with};
pub use helpers::io_error_with_help;
pub use inventory::{DirEntry, EntryKind, count_entries, list_entries};
pub use naming::{TIMESTAMP_FORMAT, extension_of, format_name, timestamp_string};
pub use unique::{entry_exists, resolve_unique_name, resolve_unique_name_with};
