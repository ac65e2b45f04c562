//! Config module.
//! Provides the run configuration type, log-path safety checks, and validation.
//! There is no config file: everything comes from the command line.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel};
pub use validate::validate_and_normalize;
