//! Transmission of generated files to a scale through the vendor driver
//!
//! One upload attempt runs strictly in sequence:
//!
//! 1. validate the scale address (IPv4 or IPv6 literal)
//! 2. check that the driver executable is present
//! 3. write every file as `SM<address>F<file number>.DAT` into the driver's
//!    working directory
//! 4. run `WR <file number> <address>` once per file, trigger file last,
//!    stopping at the first non-zero exit code
//! 5. delete every temp file that was written
//!
//! Steps 1 and 2 return before touching the filesystem. Once step 3 has
//! started, step 5 runs on every exit path. Nothing is retried.
//!
//! The attempt's own log is returned in [`UploadResult::log`]; the same
//! events go to `tracing`.

mod temp_files;

use crate::config::DriverConfig;
use crate::driver::{CliScaleDriver, DriverCommand, ScaleDriver};
use crate::error::{Error, Result};
use crate::generator::generate_files;
use crate::types::{GeneratedFile, ProductTagLink, UploadResult};
use std::net::IpAddr;
use std::sync::Arc;
use temp_files::{TempFiles, display_name};
use tracing::{error, info, warn};

const MSG_INVALID_ADDRESS: &str = "Upload failed: Invalid IP address.";
const MSG_DRIVER_NOT_FOUND: &str = "Upload failed: Driver not found.";
const MSG_DRIVER_FAILED: &str = "Upload failed.";
const MSG_DRIVER_TIMEOUT: &str = "Upload failed: Driver timed out.";
const MSG_UNEXPECTED: &str = "Upload failed with an exception.";
const MSG_SUCCESS: &str = "Upload commands executed successfully.";

/// Name of the temp file the driver expects for `file_number` and `address`
pub fn temp_file_name(address: &str, file_number: u32) -> String {
    format!("SM{address}F{file_number}.DAT")
}

/// Order in which files are handed to the driver
///
/// The trigger file goes last; all other files keep their input order.
pub fn transmission_order(files: &[GeneratedFile]) -> Vec<&GeneratedFile> {
    let mut ordered: Vec<&GeneratedFile> = files.iter().collect();
    ordered.sort_by_key(|file| file.is_trigger());
    ordered
}

/// How the invocation loop ended, when it ended without an error
enum Transmission {
    Completed,
    /// The driver returned a non-zero exit code
    Halted,
}

/// Uploads generated files to a scale
///
/// Holds no per-attempt state, so one instance can serve concurrent requests
/// for different scales.
pub struct ScaleUploader {
    driver: Arc<dyn ScaleDriver>,
}

impl ScaleUploader {
    /// Create an uploader on top of any driver implementation
    pub fn new(driver: Arc<dyn ScaleDriver>) -> Self {
        Self { driver }
    }

    /// Create an uploader that runs the vendor executable described by `config`
    pub fn from_config(config: &DriverConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(CliScaleDriver::from_config(config)?)))
    }

    /// The driver this uploader invokes
    pub fn driver(&self) -> &dyn ScaleDriver {
        self.driver.as_ref()
    }

    /// Generate the files for `products` and upload them to `address`
    ///
    /// # Errors
    ///
    /// Only generation errors are returned; upload failures are reported in
    /// the [`UploadResult`].
    pub async fn upload_products(
        &self,
        address: &str,
        products: &[ProductTagLink],
    ) -> Result<UploadResult> {
        info!(products = products.len(), address, "upload requested");
        let files = generate_files(products)?;
        Ok(self.upload(address, &files).await)
    }

    /// Upload `files` to the scale at `address`
    pub async fn upload(&self, address: &str, files: &[GeneratedFile]) -> UploadResult {
        if address.parse::<IpAddr>().is_err() {
            error!(address, "upload failed, invalid IP address");
            return UploadResult::failed(
                MSG_INVALID_ADDRESS,
                vec![format!("Error: '{address}' is not a valid IP.")],
            );
        }

        if !self.driver.is_available() {
            let executable = self.driver.executable();
            error!(driver = ?executable, "upload failed, driver not found");
            return UploadResult::failed(
                MSG_DRIVER_NOT_FOUND,
                vec![format!("Error: '{}' not found.", executable.display())],
            );
        }

        let mut log = Vec::new();
        let mut temp_files = TempFiles::new();

        let outcome = self
            .write_and_transmit(address, files, &mut temp_files, &mut log)
            .await;

        let (success, message) = match outcome {
            Ok(Transmission::Completed) => (true, MSG_SUCCESS),
            Ok(Transmission::Halted) => (false, MSG_DRIVER_FAILED),
            Err(e) => {
                error!(address, error = %e, "upload failed");
                log.push(format!("An unexpected error occurred: {e}"));
                let message = match e {
                    Error::DriverTimeout { .. } => MSG_DRIVER_TIMEOUT,
                    _ => MSG_UNEXPECTED,
                };
                (false, message)
            }
        };

        temp_files.cleanup(&mut log).await;

        if success {
            info!(address, files = files.len(), "upload completed");
            UploadResult::succeeded(message, log)
        } else {
            UploadResult::failed(message, log)
        }
    }

    async fn write_and_transmit(
        &self,
        address: &str,
        files: &[GeneratedFile],
        temp_files: &mut TempFiles,
        log: &mut Vec<String>,
    ) -> Result<Transmission> {
        let working_dir = self.driver.working_dir();
        for file in files {
            let name = temp_file_name(address, file.file_number_decimal);
            let path = working_dir.join(&name);
            temp_files.write(path.clone(), &file.content).await?;
            info!(?path, bytes = file.content.len(), "wrote temporary file");
            log.push(format!("Successfully wrote file: {name}"));
        }

        let driver_name = display_name(self.driver.executable());
        for file in transmission_order(files) {
            let command = DriverCommand::write(file.file_number_decimal, address);
            log.push(format!("Executing: {driver_name} {command}"));

            let output = self.driver.execute(&command).await?;
            if output.success() {
                log.push(format!("Success (Exit Code {}).", output.exit_code));
                log.extend(output.lines);
            } else {
                warn!(
                    exit_code = output.exit_code,
                    output = %output.lines.join("\n"),
                    "scale driver reported an error"
                );
                log.push(format!("Error (Exit Code {}).", output.exit_code));
                log.extend(output.lines);
                return Ok(Transmission::Halted);
            }
        }

        Ok(Transmission::Completed)
    }
}
