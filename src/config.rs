//! Application-level configuration loading: storage connection and listening port.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dao::game_store::sqlite::{DEFAULT_MAX_CONNECTIONS, SqliteConfig};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "BOARDGAMES_CONFIG_PATH";
/// Database used when neither the file nor the environment name one.
const DEFAULT_DATABASE_URL: &str = "sqlite://gamesdb?mode=rwc";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    /// Load the configuration file, then apply `DATABASE_URL`, `PORT`/`SERVER_PORT` and
    /// `DATABASE_MAX_CONNECTIONS` from the environment.
    pub fn load() -> Self {
        Self::from_file(resolve_config_path()).with_overrides(|key| env::var(key).ok())
    }

    /// Storage settings derived from this configuration.
    pub fn sqlite(&self) -> SqliteConfig {
        SqliteConfig::new(&self.database_url).with_max_connections(self.max_connections)
    }

    fn from_file(path: PathBuf) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply environment-style overrides looked up through `lookup`.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.database_url = url;
        }

        if let Some(port) = lookup("PORT")
            .or_else(|| lookup("SERVER_PORT"))
            .and_then(|value| parse_or_warn("PORT", &value))
        {
            self.port = port;
        }

        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|value| parse_or_warn("DATABASE_MAX_CONNECTIONS", &value))
        {
            self.max_connections = max;
        }

        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    database_url: Option<String>,
    port: Option<u16>,
    max_connections: Option<u32>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            database_url: value.database_url.unwrap_or(defaults.database_url),
            port: value.port.unwrap_or(defaults.port),
            max_connections: value.max_connections.unwrap_or(defaults.max_connections),
        }
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(key, value, "ignoring unparsable configuration override");
            None
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let raw: RawConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::from_file(PathBuf::from("does/not/exist.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig::default().with_overrides(lookup(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("SERVER_PORT", "9000"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]));
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn port_takes_precedence_over_server_port() {
        let config =
            AppConfig::default().with_overrides(lookup(&[("PORT", "81"), ("SERVER_PORT", "82")]));
        assert_eq!(config.port, 81);
    }

    #[test]
    fn unparsable_override_is_ignored() {
        let config = AppConfig::default().with_overrides(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
