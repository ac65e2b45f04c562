//! Directory inventory: one-level listing and entry counts.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::helpers::walkdir_error;

/// Classification of a direct child of the scanned directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file; participates in renaming.
    File,
    /// Directory, symlink, socket, device...; left alone.
    Other,
}

/// A direct child of the scanned directory.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Snapshot the immediate children of `dir` (never descends).
///
/// Symlinks are not followed, so a link to a file is classified as `Other`.
pub fn list_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|res| {
            let entry = res.map_err(|e| walkdir_error("list directory", dir, e))?;
            let kind = if entry.file_type().is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            Ok(DirEntry {
                path: entry.into_path(),
                kind,
            })
        })
        .collect()
}

/// Count all direct entries (files plus subdirectories plus anything else) in `dir`.
pub fn count_entries(dir: &Path) -> Result<usize> {
    let mut n = 0usize;
    for res in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        res.map_err(|e| walkdir_error("count directory entries", dir, e))?;
        n += 1;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn counts_files_and_folders_but_not_nested() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("sub").create_dir_all().unwrap();
        dir.child("sub/inner.txt").write_str("c").unwrap();
        assert_eq!(count_entries(dir.path()).unwrap(), 3);
    }

    #[test]
    fn empty_directory_counts_zero() {
        let dir = assert_fs::TempDir::new().unwrap();
        assert_eq!(count_entries(dir.path()).unwrap(), 0);
        assert!(list_entries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn list_classifies_entries() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("photo.jpg").write_str("x").unwrap();
        dir.child("Folder1").create_dir_all().unwrap();
        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        for e in entries {
            let name = e.path.file_name().unwrap().to_string_lossy().into_owned();
            match name.as_str() {
                "photo.jpg" => assert_eq!(e.kind, EntryKind::File),
                "Folder1" => assert_eq!(e.kind, EntryKind::Other),
                other => panic!("unexpected entry {other}"),
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_is_other() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("target.txt").write_str("x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("target.txt"), dir.path().join("link.txt")).unwrap();
        let entries = list_entries(dir.path()).unwrap();
        let link = entries
            .iter()
            .find(|e| e.path.ends_with("link.txt"))
            .unwrap();
        assert_eq!(link.kind, EntryKind::Other);
    }
}
