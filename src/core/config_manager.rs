// src/core/config_manager.rs
//! Unified configuration: config.yaml section plus environment overrides

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::environment::EnvironmentConfig;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub suggestion_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub account_dialog_url: String,
}

impl ConfigManager {
    /// Load all configurations. Without a config file the defaults are used.
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = if config_path.exists() {
            EnvironmentConfig::load(config_path)?
        } else {
            info!(
                "No configuration at {}, using defaults",
                config_path.display()
            );
            EnvironmentConfig::default()
        };

        Self::from_environment(environment, |key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `var` on top of the file configuration
    pub fn from_environment<F>(environment: EnvironmentConfig, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let suggestion_url = var("SUGGESTION_SERVICE_URL")
            .unwrap_or_else(|| environment.suggestion_service_url.clone());

        let account_dialog_url =
            var("ACCOUNT_DIALOG_URL").unwrap_or_else(|| environment.account_dialog_url.clone());

        let port = match var("ROCKET_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("ROCKET_PORT must be a valid port number: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            service: ServiceConfig {
                suggestion_url,
                timeout_seconds: environment.suggestion_timeout_seconds,
            },
            server: ServerSettings {
                port,
                catalog_path: environment.catalog_path,
                account_dialog_url,
            },
        })
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = ConfigManager::from_environment(EnvironmentConfig::default(), vars(&[])).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.service.suggestion_url, "http://127.0.0.1:5555");
        assert_eq!(config.service.timeout_seconds, 30);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = ConfigManager::from_environment(
            EnvironmentConfig::default(),
            vars(&[
                ("SUGGESTION_SERVICE_URL", "http://ai:9000"),
                ("ACCOUNT_DIALOG_URL", "https://jobs.test/oauth"),
                ("ROCKET_PORT", "8123"),
            ]),
        )
        .unwrap()
        .with_port(None);

        assert_eq!(config.service.suggestion_url, "http://ai:9000");
        assert_eq!(config.server.account_dialog_url, "https://jobs.test/oauth");
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.with_port(Some(9999)).server.port, 9999);
    }

    #[test]
    fn test_bad_port_is_error() {
        let result = ConfigManager::from_environment(
            EnvironmentConfig::default(),
            vars(&[("ROCKET_PORT", "eighty")]),
        );
        assert!(result.is_err());
    }
}
