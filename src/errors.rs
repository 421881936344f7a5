use std::io;

use thiserror::Error;

/// Failure classes for the scan pipeline. Every variant is fatal: the runner
/// logs it once and the process exits with code 1.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not determine the user home directory")]
    Environment,

    #[error("request to crt.sh failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read crt.sh response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("unexpected crt.sh response shape: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] io::Error),
}
