//! Config validation logic.
//! Verifies the target directory exists, is a directory and is readable, then
//! replaces it with its absolute canonical form.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::RenameError;
use crate::fs_ops::io_error_with_help;

use super::types::Config;

impl Config {
    /// Validate that `directory` can be scanned. Does not modify the config.
    pub fn validate(&self) -> Result<()> {
        let dir = &self.directory;
        ensure_dir_exists_and_is_dir(dir)?;
        ensure_readable(dir)?;
        Ok(())
    }
}

/// Validate the config and canonicalize `directory` in place.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    cfg.validate()?;
    let canonical = dunce::canonicalize(&cfg.directory)
        .map_err(io_error_with_help("canonicalize directory", &cfg.directory))?;
    if canonical != cfg.directory {
        debug!(from = %cfg.directory.display(), to = %canonical.display(), "normalized directory");
    }
    cfg.directory = canonical;
    info!(
        "Config validated: directory='{}' tag='{}' dry_run={}",
        cfg.directory.display(),
        cfg.effective_tag().unwrap_or("<none>"),
        cfg.dry_run
    );
    Ok(())
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path) -> Result<()> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("directory does not exist: {}", path.display());
            return Err(RenameError::DirectoryNotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(io_error_with_help("stat directory", path)(e)),
    };
    if !meta.is_dir() {
        error!("not a directory: {}", path.display());
        return Err(RenameError::NotADirectory(path.to_path_buf()).into());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
/// Access failures surface as `RenameError::PermissionDenied`.
fn ensure_readable(path: &Path) -> Result<()> {
    fs::read_dir(path).map_err(io_error_with_help("list directory", path))?;
    debug!("directory readable: {}", path.display());
    Ok(())
}
