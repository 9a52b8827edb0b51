//! Error types for option and configuration loading.
//!
//! The widget itself never fails; these errors only come from the file and
//! terminal plumbing around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading options, configuration or setting up logging.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no options supplied; pass them as arguments or with --options-file")]
    EmptyOptions,

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
