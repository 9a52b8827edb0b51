//! File logging for interactive sessions.
//!
//! The terminal UI owns stdout, so diagnostics go to a file instead. The
//! level comes from `DDI_LOG` (an `EnvFilter` directive), defaulting to debug.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "DDI_LOG";

/// Install a global `tracing` subscriber writing plain text to `path`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
