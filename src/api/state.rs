//! Application state for the API server

use crate::uploader::ScaleUploader;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned per request (cheap Arc clone).
#[derive(Clone)]
pub struct AppState {
    /// Uploader used by `POST /upload-to-scale`
    pub uploader: Arc<ScaleUploader>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(uploader: Arc<ScaleUploader>) -> Self {
        Self { uploader }
    }
}
