#![cfg(target_os = "linux")]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

use stamp_rename::{Config, RenameError, rename_by_timestamp};

/// Renaming inside a read-only directory must stop with a typed permission error
/// and leave the file where it was.
#[test]
fn rename_in_readonly_directory_yields_permission_denied() {
    // Skip if running as root; root may bypass permission checks and the test won't behave as expected.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().expect("tempdir");
    let dir = td.path().join("photos");
    fs::create_dir_all(&dir).unwrap();
    let src = dir.join("IMG_0001.jpg");
    fs::write(&src, "pixels").unwrap();

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

    let result = rename_by_timestamp(&Config::new(&dir, Some("t")));

    // Restore permissions so tempdir cleanup can remove the directory.
    let _ = fs::set_permissions(&dir, fs::Permissions::from_mode(0o755));

    let err = result.expect_err("expected permission denied error");
    match err.downcast_ref::<RenameError>() {
        Some(RenameError::PermissionDenied { context, .. }) => {
            assert!(
                context.to_ascii_lowercase().contains("permission denied")
                    || context.contains("[os code: 13]"),
                "unexpected context: {context}"
            );
        }
        other => panic!("expected PermissionDenied, got {other:?}: {err}"),
    }
    assert!(src.exists(), "source must stay in place after a failed rename");
}
