//! Application orchestrator.
//! Builds the config from CLI flags, initializes logging, validates the directory,
//! runs the rename engine and prints the summary.

use anyhow::Result;
use stamp_rename::cli::Args;
use stamp_rename::output as out;
use stamp_rename::{Config, RenameError, RenameEvent, rename_by_timestamp_with, validate_and_normalize};
use tracing::{debug, error, info};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg: Config = args.to_config();
    if args.log_level.is_some() && args.effective_log_level().is_none() {
        out::print_warn(&format!(
            "Unknown log level '{}'; using '{}'",
            args.log_level.as_deref().unwrap_or_default(),
            cfg.log_level
        ));
    }

    // Hold the guard until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting stamp_rename: {:?}", args);

    let result = (|| -> Result<()> {
        validate_and_normalize(&mut cfg)?;
        out::print_info(&format!("Renaming files in directory: {}", cfg.directory.display()));

        let dir = cfg.directory.clone();
        let dry_run = cfg.dry_run;
        let report = rename_by_timestamp_with(&cfg, |ev| match ev {
            RenameEvent::StartCount(n) | RenameEvent::EndCount(n) => out::print_count(&dir, n),
            RenameEvent::Renamed { from, to } => out::print_rename(from, to, dry_run),
        })?;

        out::print_summary(&report);
        info!(
            dir = %report.directory.display(),
            renamed = report.renamed,
            skipped = report.skipped,
            lost = report.lost(),
            dry_run = report.dry_run,
            "Run completed"
        );
        Ok(())
    })();

    if let Err(e) = &result {
        if let Some(re) = e.downcast_ref::<RenameError>() {
            let code = re.code();
            match re {
                RenameError::DirectoryNotFound(path) | RenameError::NotADirectory(path) => {
                    error!(code, kind = re.kind(), path = %path.display(), "Rename run failed")
                }
                RenameError::PermissionDenied { path, context } => {
                    error!(code, kind = re.kind(), path = %path.display(), %context, "Rename run failed")
                }
            }
        } else {
            error!(error = ?e, "Rename run failed");
        }
    }

    result
}
