#[cfg(unix)]
mod tests {
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    use stamp_rename::fs_ops::try_atomic_rename;

    #[test]
    fn rename_into_free_name_moves_content() {
        let td = tempdir().unwrap();
        let src = td.path().join("DSC_1000.PNG");
        fs::write(&src, "qwerty brain").unwrap();

        let dst = td.path().join("20170716_160100.PNG");
        try_atomic_rename(&src, &dst).unwrap();
        assert!(!src.exists(), "source should be gone after rename");
        assert_eq!(fs::read_to_string(&dst).unwrap(), "qwerty brain");
    }

    #[test]
    fn rename_over_existing_is_refused() {
        let td = tempdir().unwrap();
        let src = td.path().join("new.jpg");
        let dst = td.path().join("20170716_160100.jpg");
        fs::write(&src, "from-src").unwrap();
        fs::write(&dst, "old").unwrap();

        let err = try_atomic_rename(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&dst).unwrap(), "old");
        assert_eq!(fs::read_to_string(&src).unwrap(), "from-src");
    }

    #[test]
    fn missing_source_is_not_found() {
        let td = tempdir().unwrap();
        let err = try_atomic_rename(&td.path().join("gone"), &td.path().join("x")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
