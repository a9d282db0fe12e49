use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::errors::{Result, TranslatorError};

pub const CONFIG_ENV_VAR: &str = "GLOSSARY_TRANSLATE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cloud: CloudConfig,
    pub glossary: GlossaryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub location: String,
    pub translation_endpoint: String,
    pub storage_upload_endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryConfig {
    pub name: String,
    pub bucket_suffix: String,
    pub poll_interval_ms: u64,
    pub operation_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            location: "us-central1".to_string(),
            translation_endpoint: "https://translation.googleapis.com/v3".to_string(),
            storage_upload_endpoint: "https://storage.googleapis.com/upload/storage/v1"
                .to_string(),
            timeout_seconds: 60,
        }
    }
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            name: "translation-glossary".to_string(),
            bucket_suffix: "-translation-glossary".to_string(),
            poll_interval_ms: 1000,
            operation_timeout_seconds: 600,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl CloudConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl GlossaryConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_seconds)
    }

    /// Bucket that receives the exported glossary CSV for `project_id`.
    pub fn bucket_for(&self, project_id: &str) -> String {
        format!("{}{}", project_id, self.bucket_suffix)
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TranslatorError::Config(e.to_string()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TranslatorError::Config(e.to_string()))
    }

    /// Loads `path` when it exists; a missing file yields defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Path from `GLOSSARY_TRANSLATE_CONFIG`, else `config.toml`.
    pub fn resolve_path() -> String {
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }
}
