use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with {status}: {stderr}")]
    ExitStatus {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("'{program}' timed out after {}ms", timeout.as_millis())]
    Timeout {
        program: String,
        timeout: Duration,
        #[source]
        source: tokio::time::error::Elapsed,
    },
    #[error("Failed to serialize payload for '{group}': {source}")]
    SerializePayload {
        group: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to create payload file in '{dir}': {source}")]
    CreateArtifact {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write payload file '{path}': {source}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to persist payload file '{path}': {source}")]
    KeepArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
