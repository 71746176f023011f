//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config file can override any subset
//! of fields; everything has a default so the server runs with no file at
//! all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the scaffold server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Locations of static content and the index document.
    pub content: ContentConfig,

    /// Test-harness settings.
    pub harness: HarnessConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind (e.g. "0.0.0.0").
    pub host: String,

    /// Port to bind. Overridden by the `PORT` environment variable.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Static content locations, relative to the working directory unless
/// absolute.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory served under `/public`.
    pub public_dir: PathBuf,

    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,

    /// Document returned for `GET /`.
    pub index_file: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            assets_dir: PathBuf::from("assets"),
            index_file: PathBuf::from("views/index.html"),
        }
    }
}

/// Test-harness settings.
///
/// When enabled, the entry point invokes a guarded runner shortly after
/// the listener is ready. Enabled in deployment by `NODE_ENV=test`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Whether the runner fires at startup.
    pub enabled: bool,

    /// Delay between the readiness signal and the runner invocation.
    pub startup_delay_ms: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            startup_delay_ms: 1500,
        }
    }
}
