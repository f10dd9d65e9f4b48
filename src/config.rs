//! Configuration types for scale-config

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};
use utoipa::ToSchema;

/// Main configuration for the scale-config service
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Vendor driver location and invocation settings
    #[serde(default)]
    pub driver: DriverConfig,

    /// API and external server integration
    #[serde(default)]
    pub server: ServerIntegrationConfig,
}

impl Config {
    /// Load a JSON configuration file
    ///
    /// Missing keys fall back to their defaults, so `{}` is a valid file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("cannot read {}: {}", path.display(), e),
            key: None,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Vendor driver configuration
///
/// The driver expects the `.DAT` files it transmits in its own working
/// directory, so `base_dir` is both where the temp files are written and the
/// directory the driver runs in.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverConfig {
    /// Service base directory (default: directory of the running binary)
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub base_dir: Option<PathBuf>,

    /// Driver executable, relative to `base_dir` unless absolute (default: "TWSWTCP.exe")
    #[serde(default = "default_executable")]
    #[schema(value_type = String)]
    pub executable: PathBuf,

    /// Search PATH for the executable when it is not in `base_dir` (default: false)
    #[serde(default)]
    pub search_path: bool,

    /// Upper bound for a single driver invocation in seconds (default: 120)
    #[serde(default = "default_driver_timeout", with = "duration_serde")]
    #[schema(value_type = u64)]
    pub timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            executable: default_executable(),
            search_path: false,
            timeout: default_driver_timeout(),
        }
    }
}

impl DriverConfig {
    /// Resolve the base directory, falling back to the directory of the current executable
    pub fn resolve_base_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe()?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::Config {
                message: format!("{} has no parent directory", exe.display()),
                key: Some("driver.base_dir".to_string()),
            })
    }

    /// Resolve the full driver path inside `base_dir`
    ///
    /// With `search_path` enabled and no file at the expected location, the
    /// executable name is looked up on PATH instead.
    pub fn resolve_executable(&self, base_dir: &Path) -> PathBuf {
        let expected = base_dir.join(&self.executable);
        if expected.is_file() || !self.search_path {
            return expected;
        }

        match which::which(&self.executable) {
            Ok(found) => {
                tracing::debug!(path = ?found, "driver found on PATH");
                found
            }
            Err(_) => expected,
        }
    }
}

/// API and external server integration configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ServerIntegrationConfig {
    /// REST API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[serde(default = "default_bind_address")]
    #[schema(value_type = String)]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

fn default_executable() -> PathBuf {
    PathBuf::from("TWSWTCP.exe")
}

fn default_driver_timeout() -> Duration {
    Duration::from_secs(120)
}

fn default_true() -> bool {
    true
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".into()]
}

// Durations are exposed as whole seconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
