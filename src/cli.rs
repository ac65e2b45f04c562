//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - There is no config file; Args::to_config builds the whole run configuration.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Rename every file in a directory after its last-modified time (UTC).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename files in a directory by modified timestamp, with an optional tag"
)]
pub struct Args {
    /// Directory whose files are renamed (subdirectories are left alone).
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Tag appended to every generated name, inserted verbatim.
    #[arg(
        short = 't',
        long,
        value_name = "TAG",
        allow_hyphen_values = true,
        help = "Tag appended to every new filename"
    )]
    pub tag: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stderr.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Dry-run: print planned renames but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be renamed, but do not modify files"
    )]
    pub dry_run: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// The directory argument with stray shell quoting removed.
    pub fn resolved_directory(&self) -> PathBuf {
        match self.directory.to_str() {
            Some(s) => Self::sanitize_str(s),
            None => self.directory.clone(),
        }
    }

    #[inline]
    fn sanitize_str(s: &str) -> PathBuf {
        // Trim surrounding single/double quotes if user invoked with quotes in PowerShell or CMD.
        let trimmed = s.trim();
        let mut inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.to_string()
        };

        // PowerShell often leaves a trailing backslash inside single quotes; drop one
        // trailing separator but never touch a root like "/" or "C:\".
        let is_root = inner.len() == 1 || inner.ends_with(":\\") || inner.ends_with(":/");
        if (inner.ends_with('\\') || inner.ends_with('/')) && !is_root {
            inner.pop();
        }

        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Build the run configuration from the parsed flags.
    pub fn to_config(&self) -> Config {
        Config {
            directory: self.resolved_directory(),
            tag: self.tag.clone(),
            log_level: self.effective_log_level().unwrap_or_default(),
            log_file: self.log_file.clone(),
            dry_run: self.dry_run,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
