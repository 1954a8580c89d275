// file: src/executor.rs
// version: 1.1.0
// guid: 43cac051-4a78-4a0e-936f-67b430ef77bf

//! Runs the wrapped binary and collects its exit status

use crate::config::{Config, OutputMode};
use crate::error::{Result, WrapperError};
use crate::forward::display_command;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, Instrument};

/// Result of one invocation of the wrapped binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub exit_code: i32,
    /// Present only in capture mode
    pub stdout: Option<String>,
    /// Present only in capture mode
    pub stderr: Option<String>,
}

/// Executor for the wrapped binary
pub struct Executor {
    binary: String,
    output_mode: OutputMode,
}

impl Executor {
    /// Create a new executor from the resolved configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            binary: config.binary_path()?,
            output_mode: config.output_mode,
        })
    }

    /// Binary this executor launches, as configured
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Resolve the binary to a launchable path.
    ///
    /// Bare names are looked up on `PATH`; anything with a separator is used
    /// as given and left for the OS to reject.
    pub fn resolve_binary(&self) -> Result<PathBuf> {
        let path = Path::new(&self.binary);
        if path.components().count() > 1 {
            return Ok(path.to_path_buf());
        }

        which::which(&self.binary).map_err(|e| {
            WrapperError::launch(
                self.binary.clone(),
                std::io::Error::new(ErrorKind::NotFound, e.to_string()),
            )
        })
    }

    /// Run the binary with `args` appended and wait for it to exit
    pub async fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<Outcome> {
        let span = tracing::info_span!("forward", binary = %self.binary);
        self.run_impl(args).instrument(span).await
    }

    async fn run_impl<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<Outcome> {
        let program = self.resolve_binary()?;
        info!("Executing: {}", display_command(&self.binary, args));
        debug!("Resolved binary: {}", program.display());

        let mut cmd = Command::new(&program);
        cmd.args(args).stdin(Stdio::inherit());

        let outcome = match self.output_mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .await
                    .map_err(|e| WrapperError::launch(self.binary.clone(), e))?;

                Outcome {
                    exit_code: exit_code_of(status),
                    stdout: None,
                    stderr: None,
                }
            }
            OutputMode::Capture => {
                let output = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .map_err(|e| WrapperError::launch(self.binary.clone(), e))?;

                Outcome {
                    exit_code: exit_code_of(output.status),
                    stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                    stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
                }
            }
        };

        info!("Child exited with code {}", outcome.exit_code);
        Ok(outcome)
    }
}

/// Numeric status of a finished child.
///
/// A child killed by a signal has no code; it maps to `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
