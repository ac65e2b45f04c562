use filetime::{FileTime, set_file_mtime};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use stamp_rename::{Config, RenameEvent, rename_by_timestamp, rename_by_timestamp_with};

const T0: i64 = 1_500_220_860;

fn write_with_mtime(path: &Path, content: &str, secs: i64) {
    fs::write(path, content).unwrap();
    set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
}

fn names_in(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn seed(dir: &Path) {
    write_with_mtime(&dir.join("a.jpg"), "a", T0);
    write_with_mtime(&dir.join("b.jpg"), "b", T0);
    write_with_mtime(&dir.join("20170716_160100_x.jpg"), "old", T0 + 60);
    fs::create_dir(dir.join("sub")).unwrap();
}

fn planned_targets(dir: &Path, dry_run: bool) -> BTreeSet<PathBuf> {
    let mut cfg = Config::new(dir, Some("x"));
    cfg.dry_run = dry_run;
    let mut targets = BTreeSet::new();
    rename_by_timestamp_with(&cfg, |ev| {
        if let RenameEvent::Renamed { to, .. } = ev {
            targets.insert(to.to_path_buf());
        }
    })
    .unwrap();
    targets
}

#[test]
fn dry_run_leaves_directory_untouched() {
    let td = tempdir().unwrap();
    let dir = td.path();
    seed(dir);
    let before = names_in(dir);

    let mut cfg = Config::new(dir, Some("x"));
    cfg.dry_run = true;
    let report = rename_by_timestamp(&cfg).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.renamed, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.lost(), 0);
    assert_eq!(names_in(dir), before);
}

#[test]
fn dry_run_plan_matches_real_run() {
    let td = tempdir().unwrap();
    let dir = td.path();
    seed(dir);

    // Same directory, unchanged in between, so both runs see the same listing order.
    let planned = planned_targets(dir, true);
    let actual = planned_targets(dir, false);

    assert_eq!(planned.len(), 3, "plan must not reuse a name: {planned:?}");
    assert_eq!(planned, actual);
    for target in &actual {
        assert!(target.exists(), "missing {}", target.display());
    }
}
