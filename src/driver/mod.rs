//! Vendor driver invocation
//!
//! The scale's network protocol lives entirely inside a vendor command-line
//! driver. This module is the process boundary: the uploader hands it a
//! [`DriverCommand`] and gets back the exit code plus the captured output.
//!
//! - [`ScaleDriver`]: the interface the uploader depends on
//! - [`CliScaleDriver`]: runs the vendor executable as a child process
//!
//! ## Usage
//!
//! ```no_run
//! use scale_config::driver::{CliScaleDriver, DriverCommand, ScaleDriver};
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = CliScaleDriver::new(
//!         PathBuf::from("C:/scale/TWSWTCP.exe"),
//!         PathBuf::from("C:/scale"),
//!         Duration::from_secs(120),
//!     );
//!
//!     let output = driver.execute(&DriverCommand::write(170, "192.168.1.50")).await?;
//!     println!("exit code {}: {:?}", output.exit_code, output.lines);
//!     Ok(())
//! }
//! ```

mod cli;
mod traits;

pub use cli::CliScaleDriver;
pub use traits::{DriverCommand, DriverOutput, ScaleDriver};
