use clap::Parser;
use stamp_rename::cli::Args;
use stamp_rename::config::types::LogLevel;
use std::path::PathBuf;

#[test]
fn directory_and_short_tag() {
    let args = Args::parse_from(["stamp_rename", "/tmp/photos", "-t", "holiday"]);
    let cfg = args.to_config();
    assert_eq!(cfg.directory, PathBuf::from("/tmp/photos"));
    assert_eq!(cfg.tag.as_deref(), Some("holiday"));
    assert!(!cfg.dry_run);
}

#[test]
fn long_tag_may_start_with_hyphen() {
    let args = Args::parse_from(["stamp_rename", "/tmp/photos", "--tag", "-draft"]);
    assert_eq!(args.tag.as_deref(), Some("-draft"));
}

#[test]
fn tag_is_optional() {
    let args = Args::parse_from(["stamp_rename", "/tmp/photos"]);
    let cfg = args.to_config();
    assert_eq!(cfg.tag, None);
    assert_eq!(cfg.effective_tag(), None);
}

#[test]
fn directory_is_required() {
    assert!(Args::try_parse_from(["stamp_rename"]).is_err());
}

#[test]
fn quoted_directory_is_unwrapped() {
    let args = Args::parse_from(["stamp_rename", "'/tmp/my photos/'"]);
    assert_eq!(args.resolved_directory(), PathBuf::from("/tmp/my photos"));

    let args = Args::parse_from(["stamp_rename", "\"/tmp/x\""]);
    assert_eq!(args.resolved_directory(), PathBuf::from("/tmp/x"));
}

#[test]
fn root_directory_keeps_its_separator() {
    let args = Args::parse_from(["stamp_rename", "/"]);
    assert_eq!(args.resolved_directory(), PathBuf::from("/"));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["stamp_rename", "/tmp", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["stamp_rename", "/tmp", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["stamp_rename", "/tmp", "--log-level", "loud"]);
    assert_eq!(args.effective_log_level(), None);
    assert_eq!(args.to_config().log_level, LogLevel::Normal);
}

#[test]
fn to_config_carries_flags() {
    let args = Args::parse_from([
        "stamp_rename",
        "/tmp/photos",
        "--dry-run",
        "--log-file",
        "/tmp/run.log",
        "--log-level",
        "quiet",
    ]);
    let cfg = args.to_config();
    assert!(cfg.dry_run);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/run.log")));
    assert_eq!(cfg.log_level, LogLevel::Quiet);
}
