//! Driver implementation that runs the vendor executable

use super::traits::{DriverCommand, DriverOutput, ScaleDriver};
use crate::config::DriverConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

/// Runs the vendor driver as a child process
///
/// Each call spawns `<executable> WR <file> <address>` in the working
/// directory, collects stdout and stderr line by line, and waits for exit.
/// A call that outlives `timeout` is killed and reported as
/// [`Error::DriverTimeout`].
pub struct CliScaleDriver {
    executable: PathBuf,
    working_dir: PathBuf,
    timeout: Duration,
}

impl CliScaleDriver {
    /// Create a driver with an explicit executable and working directory
    pub fn new(executable: PathBuf, working_dir: PathBuf, timeout: Duration) -> Self {
        Self {
            executable,
            working_dir,
            timeout,
        }
    }

    /// Create a driver from configuration
    ///
    /// # Errors
    ///
    /// Fails only if no base directory is configured and the directory of the
    /// running binary cannot be determined.
    pub fn from_config(config: &DriverConfig) -> Result<Self> {
        let base_dir = config.resolve_base_dir()?;
        let executable = config.resolve_executable(&base_dir);
        Ok(Self::new(executable, base_dir, config.timeout))
    }

    async fn run(&self, command: &DriverCommand) -> Result<DriverOutput> {
        let mut child = Command::new(&self.executable)
            .args(command.args())
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::ExternalTool(format!("Failed to execute driver: {}", e)))?;

        let lines = collect_output(&mut child).await?;
        let status = child.wait().await?;

        Ok(DriverOutput {
            exit_code: status.code().unwrap_or(-1),
            lines,
        })
    }
}

/// Read stdout and stderr until both are closed, keeping arrival order
///
/// The driver prints in its console code page, so lines are split on raw
/// `\n` bytes and decoded lossily; a trailing `\r` is dropped.
async fn collect_output(child: &mut Child) -> Result<Vec<String>> {
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::ExternalTool("driver stdout was not captured".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::ExternalTool("driver stderr was not captured".to_string()))?;

    // `next_segment` is cancel safe, so both streams can share one select loop
    let mut stdout = BufReader::new(stdout).split(b'\n');
    let mut stderr = BufReader::new(stderr).split(b'\n');
    let mut stdout_open = true;
    let mut stderr_open = true;
    let mut lines = Vec::new();

    while stdout_open || stderr_open {
        tokio::select! {
            segment = stdout.next_segment(), if stdout_open => match segment? {
                Some(raw) => lines.push(format!("[OUT] {}", decode_line(&raw))),
                None => stdout_open = false,
            },
            segment = stderr.next_segment(), if stderr_open => match segment? {
                Some(raw) => lines.push(format!("[ERR] {}", decode_line(&raw))),
                None => stderr_open = false,
            },
        }
    }

    Ok(lines)
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[async_trait]
impl ScaleDriver for CliScaleDriver {
    fn executable(&self) -> &Path {
        &self.executable
    }

    fn is_available(&self) -> bool {
        self.executable.is_file()
    }

    fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    async fn execute(&self, command: &DriverCommand) -> Result<DriverOutput> {
        tracing::info!(
            driver = ?self.executable,
            args = %command,
            "executing scale driver"
        );

        // Dropping the timed-out future drops the child, which kills it
        match tokio::time::timeout(self.timeout, self.run(command)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    driver = ?self.executable,
                    args = %command,
                    timeout = ?self.timeout,
                    "scale driver timed out"
                );
                Err(Error::DriverTimeout {
                    command: command.to_string(),
                    timeout: self.timeout,
                })
            }
        }
    }
}
