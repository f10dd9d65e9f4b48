//! Scoped ownership of the `.DAT` files handed to the driver

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Temp files written during one upload attempt
///
/// [`TempFiles::cleanup`] removes them and reports each removal in the upload
/// log. If the attempt is abandoned before that (the request is cancelled or a
/// panic unwinds), `Drop` removes whatever is left.
#[derive(Debug, Default)]
pub(crate) struct TempFiles {
    paths: Vec<PathBuf>,
}

impl TempFiles {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Write `content` to `path` and take ownership of the file
    pub(crate) async fn write(&mut self, path: PathBuf, content: &[u8]) -> std::io::Result<()> {
        // Tracked before writing so a partial file is still removed
        self.paths.push(path.clone());
        tokio::fs::write(&path, content).await
    }

    /// Delete every owned file, appending one log line per file
    ///
    /// Failures are logged as warnings and never returned.
    pub(crate) async fn cleanup(mut self, log: &mut Vec<String>) {
        for path in std::mem::take(&mut self.paths) {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    debug!(?path, "removed temporary file");
                    log.push(format!("Cleaned up: {}", display_name(&path)));
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!(?path, "temporary file already gone");
                }
                Err(e) => {
                    warn!(?path, error = %e, "failed to clean up temporary file");
                    log.push(format!("Warning: Failed to clean up {}.", path.display()));
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        for path in self.paths.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => warn!(?path, "removed temporary file left by an abandoned upload"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(?path, error = %e, "failed to clean up temporary file"),
            }
        }
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn cleanup_removes_files_and_logs_each() {
        let dir = TempDir::new().unwrap();
        let mut files = TempFiles::new();
        files.write(dir.path().join("SM1.2.3.4F170.DAT"), b"a").await.unwrap();
        files.write(dir.path().join("SM1.2.3.4F37.DAT"), b"b").await.unwrap();
        assert_eq!(files.paths().len(), 2);

        let mut log = Vec::new();
        files.cleanup(&mut log).await;

        assert_eq!(
            log,
            vec![
                "Cleaned up: SM1.2.3.4F170.DAT".to_string(),
                "Cleaned up: SM1.2.3.4F37.DAT".to_string(),
            ]
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn drop_removes_files_without_cleanup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SM1.2.3.4F204.DAT");
        {
            let mut files = TempFiles::new();
            files.write(path.clone(), b"abc").await.unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn failed_write_is_still_tracked() {
        let dir = TempDir::new().unwrap();
        let mut files = TempFiles::new();
        let result = files
            .write(dir.path().join("missing-dir").join("x.DAT"), b"x")
            .await;

        assert!(result.is_err());
        assert_eq!(files.paths().len(), 1);

        let mut log = Vec::new();
        files.cleanup(&mut log).await;
        assert!(log.is_empty());
    }

    #[test]
    fn display_name_is_the_file_name() {
        assert_eq!(
            display_name(Path::new("/srv/scale/SM10.0.0.1F170.DAT")),
            "SM10.0.0.1F170.DAT"
        );
    }
}
