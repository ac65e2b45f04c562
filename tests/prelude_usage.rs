use stamp_rename::prelude::*;

#[test]
fn prelude_exports_expected_items() {
    let mut cfg = Config::new("/srv/photos", Some("tag"));
    let _ = LogLevel::Debug;
    let _err = RenameError::DirectoryNotFound("/nowhere".into());
    // Signatures visible through the prelude; not invoked (would need a real directory).
    let _run: fn(&Config) -> anyhow::Result<RenameReport> = rename_by_timestamp;
    let _ev = RenameEvent::StartCount(0);
    cfg.dry_run = true;
    assert!(cfg.dry_run);
}
