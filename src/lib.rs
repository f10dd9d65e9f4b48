//! # scale-config
//!
//! Generates the binary configuration files that link products to electronic
//! shelf-label tags on a retail scale, and uploads them through the vendor's
//! command-line driver.
//!
//! Three files are produced for every product list:
//!
//! | File | Number | Content |
//! |------|--------|---------|
//! | `AA PLU4 FILE` | `AAH` / 170 | PLU-to-tag link records (30 bytes each) |
//! | `CC TAG INFO FILE` | `CCH` / 204 | Tag information records (176 bytes each) |
//! | `PLU FILE (MOCK)` | `25H` / 37 | Placeholder; its transmission applies the update |
//!
//! ## Quick Start
//!
//! ```no_run
//! use scale_config::{Config, ProductTagLink, ScaleUploader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let products = vec![ProductTagLink {
//!         plu_number: 10,
//!         tag_id: "111111111".to_string(),
//!         product_name: "Angus Beef".to_string(),
//!         image_id: 42,
//!     }];
//!
//!     // Inspect the files without touching a scale
//!     let files = scale_config::generate_files(&products)?;
//!     println!("generated {} files", files.len());
//!
//!     // Or send them to one
//!     let uploader = ScaleUploader::from_config(&Config::default().driver)?;
//!     let result = uploader.upload_products("192.168.1.50", &products).await?;
//!     for line in &result.log {
//!         println!("{line}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Vendor driver abstraction and process runner
pub mod driver;
/// Binary field and record encoders
pub mod encoding;
/// Error types
pub mod error;
/// Scale file assembly
pub mod generator;
/// Core request, response and file types
pub mod types;
/// Upload orchestration
pub mod uploader;

// Re-export commonly used types
pub use config::{ApiConfig, Config, DriverConfig};
pub use driver::{CliScaleDriver, DriverCommand, DriverOutput, ScaleDriver};
pub use error::{ApiError, Error, ErrorDetail, Result, ToHttpStatus};
pub use generator::{generate_files, generate_for_transport};
pub use types::{
    GeneratedFile, GenerationResult, ProductTagLink, ScaleFile, UploadRequest, UploadResult,
};
pub use uploader::ScaleUploader;

/// Wait for a termination signal.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// Used as the graceful shutdown trigger of the API server.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Registration may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), Ok(mut sigint)) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            sigint.recv().await;
            tracing::info!("Received SIGINT signal (Ctrl+C)");
        }
        (Ok(mut sigterm), Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            sigterm.recv().await;
            tracing::info!("Received SIGTERM signal");
        }
        (Err(e), Err(_)) => {
            tracing::error!(error = %e, "Could not register any signal handlers, using ctrl_c fallback");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

/// Wait for a termination signal (Ctrl+C).
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
