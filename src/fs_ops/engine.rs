//! Directory rename engine.
//!
//! Renames every regular file directly inside the configured directory to a name
//! built from its UTC modified time and the optional tag. Subdirectories are
//! skipped and never descended into.
//!
//! Precondition: a single invocation has exclusive use of the directory. The
//! rename itself never overwrites, so a concurrent writer costs an extra name
//! resolution rather than a lost file.

use anyhow::{Result, anyhow, bail};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;

use super::atomic::try_atomic_rename;
use super::helpers::io_error_with_help;
use super::inventory::{EntryKind, count_entries, list_entries};
use super::naming::{extension_of, timestamp_string};
use super::unique::{entry_exists, resolve_unique_name, resolve_unique_name_with};

/// Upper bound on re-resolving a name that another process claimed mid-rename.
const MAX_RENAME_ATTEMPTS: u32 = 64;

/// Outcome of one run over a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameReport {
    pub directory: PathBuf,
    /// Direct entries before the run
    pub starting_count: usize,
    /// Direct entries after the run (equal to `starting_count` on dry-run)
    pub ending_count: usize,
    /// Regular files renamed (or planned, on dry-run)
    pub renamed: usize,
    /// Directories, symlinks and other non-regular entries left alone
    pub skipped: usize,
    pub dry_run: bool,
}

/// Progress signals emitted while a run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameEvent<'a> {
    /// Entry count taken before any rename.
    StartCount(usize),
    /// One file renamed (or planned, on dry-run).
    Renamed { from: &'a Path, to: &'a Path },
    /// Entry count taken after the last rename.
    EndCount(usize),
}

impl RenameReport {
    /// `starting_count - ending_count`; anything but 0 means entries went missing or appeared.
    pub fn lost(&self) -> i64 {
        self.starting_count as i64 - self.ending_count as i64
    }
}

/// Rename all regular files in `config.directory` by modified time.
pub fn rename_by_timestamp(config: &Config) -> Result<RenameReport> {
    rename_by_timestamp_with(config, |_| {})
}

/// Like [`rename_by_timestamp`], reporting progress through `on_event`.
///
/// Renamed pairs are handed to the callback as they happen and not retained.
///
/// The first filesystem failure stops the run; files already renamed stay renamed.
pub fn rename_by_timestamp_with<F>(config: &Config, mut on_event: F) -> Result<RenameReport>
where
    F: FnMut(RenameEvent<'_>),
{
    config.validate()?;
    let dir = config.directory.as_path();
    let tag = config.effective_tag();

    let starting_count = count_entries(dir)?;
    info!(dir = %dir.display(), count = starting_count, "Entries before renaming");
    on_event(RenameEvent::StartCount(starting_count));

    // Snapshot first so files renamed during the loop are never revisited.
    let entries = list_entries(dir)?;
    let mut plan = DryRunPlan::default();
    let mut renamed = 0usize;
    let mut skipped = 0usize;

    for entry in entries {
        if entry.kind != EntryKind::File {
            debug!(path = %entry.path.display(), "skipping non-regular entry");
            skipped += 1;
            continue;
        }
        let src = entry.path.as_path();
        let file_name = src
            .file_name()
            .ok_or_else(|| anyhow!("Directory entry missing a file name: {}", src.display()))?;

        let modified = fs::metadata(src)
            .and_then(|m| m.modified())
            .map_err(io_error_with_help("read modified time", src))?;
        let timestamp = timestamp_string(modified);
        let extension = extension_of(file_name);

        let dest = if config.dry_run {
            let name = resolve_unique_name_with(dir, &timestamp, tag, &extension, |p| plan.is_taken(p));
            let dest = dir.join(name);
            plan.record(src, &dest);
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would rename file");
            dest
        } else {
            rename_to_unique(dir, src, &timestamp, tag, &extension)?
        };

        on_event(RenameEvent::Renamed { from: src, to: &dest });
        renamed += 1;
    }

    let ending_count = if config.dry_run {
        starting_count
    } else {
        count_entries(dir)?
    };
    info!(dir = %dir.display(), count = ending_count, "Entries after renaming");
    on_event(RenameEvent::EndCount(ending_count));

    let report = RenameReport {
        directory: dir.to_path_buf(),
        starting_count,
        ending_count,
        renamed,
        skipped,
        dry_run: config.dry_run,
    };
    if report.lost() != 0 {
        warn!(
            before = starting_count,
            after = ending_count,
            lost = report.lost(),
            "Entry count changed during renaming"
        );
    }
    Ok(report)
}

/// Resolve a free name and rename `src` onto it, re-resolving if the name is
/// claimed between the probe and the rename.
fn rename_to_unique(
    dir: &Path,
    src: &Path,
    timestamp: &str,
    tag: Option<&str>,
    extension: &std::ffi::OsStr,
) -> Result<PathBuf> {
    for attempt in 1..=MAX_RENAME_ATTEMPTS {
        let dest = dir.join(resolve_unique_name(dir, timestamp, tag, extension));
        match try_atomic_rename(src, &dest) {
            Ok(()) => {
                info!(src = %src.display(), dest = %dest.display(), "Renamed file");
                return Ok(dest);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(dest = %dest.display(), attempt, "name claimed before rename, resolving again");
            }
            Err(e) => return Err(io_error_with_help("rename file", src)(e)),
        }
    }
    bail!(
        "Could not find a free name for '{}' after {} attempts; is another process writing to '{}'?",
        src.display(),
        MAX_RENAME_ATTEMPTS,
        dir.display()
    )
}

/// Names claimed and vacated by planned renames, overlaid on the real directory.
#[derive(Debug, Default)]
struct DryRunPlan {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl DryRunPlan {
    fn is_taken(&self, path: &Path) -> bool {
        self.claimed.contains(path) || (entry_exists(path) && !self.vacated.contains(path))
    }

    fn record(&mut self, src: &Path, dest: &Path) {
        self.vacated.insert(src.to_path_buf());
        self.claimed.insert(dest.to_path_buf());
    }
}
