//! Traits and types for driver invocation

use async_trait::async_trait;
use std::fmt;
use std::path::Path;

/// One driver call: write file `file_number` to the scale at `address`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverCommand {
    /// Decimal protocol file number
    pub file_number: u32,
    /// Scale IP address, already validated
    pub address: String,
}

impl DriverCommand {
    /// Build a `WR` (write file) command
    pub fn write(file_number: u32, address: impl Into<String>) -> Self {
        Self {
            file_number,
            address: address.into(),
        }
    }

    /// Command line arguments, in the order the driver expects them
    pub fn args(&self) -> [String; 3] {
        [
            "WR".to_string(),
            self.file_number.to_string(),
            self.address.clone(),
        ]
    }
}

impl fmt::Display for DriverCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WR {} {}", self.file_number, self.address)
    }
}

/// Captured result of one driver run
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOutput {
    /// Process exit code; -1 when the process was killed by a signal
    pub exit_code: i32,
    /// Output lines in arrival order, prefixed `[OUT] ` or `[ERR] `
    pub lines: Vec<String>,
}

impl DriverOutput {
    /// Whether the driver reported success
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Interface to the vendor driver
///
/// The uploader only needs to know where the driver lives, whether it is
/// present, and how to run one command. Implementations block the calling
/// task until the command finishes.
#[async_trait]
pub trait ScaleDriver: Send + Sync {
    /// Location of the driver executable, for logging and error messages
    fn executable(&self) -> &Path;

    /// Whether the driver executable is present
    fn is_available(&self) -> bool;

    /// Directory the driver runs in and reads its `.DAT` files from
    fn working_dir(&self) -> &Path;

    /// Run one command and capture its output
    ///
    /// # Errors
    ///
    /// A non-zero exit code is not an error; it is reported in
    /// [`DriverOutput::exit_code`]. Errors are returned when the process cannot
    /// be started or does not exit in time.
    async fn execute(&self, command: &DriverCommand) -> crate::Result<DriverOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_command_renders_driver_arguments() {
        let command = DriverCommand::write(204, "10.1.2.3");

        assert_eq!(command.args(), ["WR", "204", "10.1.2.3"]);
        assert_eq!(command.to_string(), "WR 204 10.1.2.3");
    }

    #[test]
    fn only_zero_exit_code_is_success() {
        let ok = DriverOutput {
            exit_code: 0,
            lines: vec![],
        };
        let failed = DriverOutput {
            exit_code: 3,
            lines: vec!["[ERR] no route to host".into()],
        };
        let killed = DriverOutput {
            exit_code: -1,
            lines: vec![],
        };

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
