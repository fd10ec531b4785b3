use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub demo: DemoConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Readings used by `wd demo`
    pub sample: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format used when no --format flag is given
    pub format: OutputFormat,
    /// Print one line per day instead of the bare list of waits
    pub detail: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo: DemoConfig {
                sample: vec![73, 74, 75, 71, 69, 72, 76, 73],
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                detail: false,
            },
        }
    }
}

/// Returns the default global config path: ~/.waitdays/waitdays.toml
pub fn global_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".waitdays")
        .join("waitdays.toml")
}

/// Load configuration using figment's layered system:
/// 1. Built-in Rust defaults (AppConfig::default)
/// 2. Config file (~/.waitdays/waitdays.toml or --config) — silently ignored if missing
/// 3. Environment variables prefixed with WAITDAYS_ (nested with __)
///    e.g. WAITDAYS_OUTPUT__FORMAT=json
pub fn load(config_file: &Path) -> Result<AppConfig> {
    let config = Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Toml::file(config_file))
        .merge(Env::prefixed("WAITDAYS_").split("__"))
        .extract()?;

    Ok(config)
}
