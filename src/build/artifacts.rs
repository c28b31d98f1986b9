use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempPath;

use crate::error::{ConfigError, ExecError};

/// A payload written to disk for one invocation's body flag.
///
/// Scoped artifacts delete their file when dropped; kept artifacts stay on
/// disk after the campaign.
#[derive(Debug)]
pub enum PayloadArtifact {
    Scoped(TempPath),
    Kept(PathBuf),
}

impl PayloadArtifact {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            PayloadArtifact::Scoped(path) => path,
            PayloadArtifact::Kept(path) => path,
        }
    }
}

/// Where substituted payloads are persisted.
///
/// Implementations must hand out distinct paths for distinct
/// `(group, index)` pairs even when called from concurrent groups.
pub trait ArtifactSink: Send + Sync {
    /// Serializes `payload` and stores it for combination `index` of `group`.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be serialized or written.
    fn allocate(&self, group: &str, index: usize, payload: &Value)
    -> Result<PayloadArtifact, ExecError>;
}

/// Writes payload files into a directory, one uniquely named file per
/// `(group, index)`.
#[derive(Debug, Clone)]
pub struct TempDirSink {
    dir: PathBuf,
    keep: bool,
}

impl TempDirSink {
    /// Uses `dir` for payload files, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn create(dir: PathBuf, keep: bool) -> Result<Self, ConfigError> {
        std::fs::create_dir_all(&dir).map_err(|err| ConfigError::CreateTmpDir {
            path: dir.clone(),
            source: err,
        })?;
        Ok(Self { dir, keep })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for TempDirSink {
    fn allocate(
        &self,
        group: &str,
        index: usize,
        payload: &Value,
    ) -> Result<PayloadArtifact, ExecError> {
        let body = serde_json::to_vec(payload).map_err(|err| ExecError::SerializePayload {
            group: group.to_owned(),
            source: err,
        })?;

        let prefix = format!("{}-{}-", file_stem(group), index);
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".json")
            .tempfile_in(&self.dir)
            .map_err(|err| ExecError::CreateArtifact {
                dir: self.dir.clone(),
                source: err,
            })?;
        file.write_all(&body)
            .and_then(|()| file.flush())
            .map_err(|err| ExecError::WriteArtifact {
                path: file.path().to_path_buf(),
                source: err,
            })?;

        let path = file.into_temp_path();
        if !self.keep {
            return Ok(PayloadArtifact::Scoped(path));
        }
        let display = path.to_path_buf();
        path.keep()
            .map(PayloadArtifact::Kept)
            .map_err(|err| ExecError::KeepArtifact {
                path: display,
                source: err.error,
            })
    }
}

fn file_stem(group: &str) -> String {
    let stem: String = group
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "payload".to_owned()
    } else {
        stem
    }
}
