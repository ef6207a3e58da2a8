//! Error types for fwstamp.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// fwstamp error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fwstamp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a commit hash could not be obtained.
///
/// These never leave the generator; they are mapped to the `"unknown"`
/// placeholder there.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("could not start version-control tool: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("could not wait for version-control tool: {0}")]
    Wait(#[source] std::io::Error),

    #[error("version-control tool did not finish within {0:?}")]
    Timeout(Duration),

    #[error("version-control tool exited with {0}")]
    Failed(ExitStatus),

    #[error("version-control tool produced non UTF-8 output")]
    InvalidOutput,

    #[error("version-control tool produced no output")]
    EmptyOutput,
}
