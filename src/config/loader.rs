//! Configuration loading.
//!
//! Precedence, lowest to highest: schema defaults, an optional TOML file
//! named by `SCAFFOLD_CONFIG`, then the environment overlay (`PORT`,
//! `NODE_ENV`). Environment access is injected as a lookup closure so the
//! overlay can be tested without touching process state.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "SCAFFOLD_CONFIG";

/// Environment variable overriding the listener port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable that enables the test harness when set to `test`.
pub const ENV_MODE_VAR: &str = "NODE_ENV";

const TEST_MODE: &str = "test";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Load configuration using the given environment lookup.
///
/// The binary passes `|key| std::env::var(key).ok()`.
pub fn load<E>(env: E) -> Result<ServerConfig, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let mut config = match env(CONFIG_PATH_VAR) {
        Some(path) => from_file(Path::new(&path))?,
        None => ServerConfig::default(),
    };
    apply_env(&mut config, &env)?;
    Ok(config)
}

/// Load and parse a TOML config file.
pub fn from_file(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env<E>(config: &mut ServerConfig, env: &E) -> Result<(), ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(PORT_VAR) {
        config.listener.port = value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source })?;
    }

    if env(ENV_MODE_VAR).as_deref() == Some(TEST_MODE) {
        config.harness.enabled = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = load(no_env).unwrap();
        assert_eq!(config.listener.port, 3000);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert!(!config.harness.enabled);
        assert_eq!(config.harness.startup_delay_ms, 1500);
    }

    #[test]
    fn port_overlay_applies() {
        let config = load(|key| match key {
            PORT_VAR => Some("8123".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.listener.port, 8123);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = load(|key| match key {
            PORT_VAR => Some("not-a-port".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_mode_enables_harness() {
        let config = load(|key| match key {
            ENV_MODE_VAR => Some("test".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(config.harness.enabled);
    }

    #[test]
    fn other_modes_leave_harness_disabled() {
        let config = load(|key| match key {
            ENV_MODE_VAR => Some("production".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(!config.harness.enabled);
    }

    #[test]
    fn config_file_fields_parse() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            port = 4000

            [content]
            index_file = "site/home.html"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.port, 4000);
        assert_eq!(
            config.content.index_file,
            std::path::PathBuf::from("site/home.html")
        );
        // Untouched sections keep their defaults.
        assert_eq!(config.content.public_dir, std::path::PathBuf::from("public"));
    }
}
