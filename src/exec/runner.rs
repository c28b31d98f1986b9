use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::ExecError;

/// Default benchmarking executable.
pub const DEFAULT_TOOL: &str = "ab";

/// Runs the benchmarking tool once and returns its standard output.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Invokes the tool with `args`, giving up after `timeout` when set.
    ///
    /// # Errors
    ///
    /// Returns an error when the tool cannot be started, exits unsuccessfully
    /// or exceeds the timeout.
    async fn invoke(&self, args: &[String], timeout: Option<Duration>) -> Result<String, ExecError>;

    /// Executable name used in log messages.
    fn program(&self) -> &str {
        DEFAULT_TOOL
    }
}

/// Spawns the tool as a child process per invocation.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
}

impl ProcessRunner {
    #[must_use]
    pub const fn new(program: String) -> Self {
        Self { program }
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn invoke(&self, args: &[String], timeout: Option<Duration>) -> Result<String, ExecError> {
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| ExecError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let waited = match timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|err| ExecError::Timeout {
                    program: self.program.clone(),
                    timeout: limit,
                    source: err,
                })?,
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|err| ExecError::Wait {
            program: self.program.clone(),
            source: err,
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ExecError::ExitStatus {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            })
        }
    }

    fn program(&self) -> &str {
        &self.program
    }
}
