// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub catalog_path: PathBuf,
    pub suggestion_service_url: String,
    pub account_dialog_url: String,
    #[serde(default = "default_timeout")]
    pub suggestion_timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/catalog.yaml"),
            suggestion_service_url: "http://127.0.0.1:5555".to_string(),
            account_dialog_url: String::new(),
            suggestion_timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EnvironmentConfig {
    /// Load the section of `config_path` matching the current environment
    pub fn load(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let env_config = Self::from_yaml(&config_content, &environment)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Self {
            catalog_path: Self::resolve_path(&env_config.catalog_path)?,
            ..env_config
        })
    }

    pub fn get_environment() -> String {
        std::env::var("CVDESK_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration YAML")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
