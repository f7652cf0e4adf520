use std::path::PathBuf;
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::DEFAULT_LOCAL_WORKER;
use crate::infrastructure::export::PageLayout;
use crate::infrastructure::http::DEFAULT_API_BASE_URL;

use super::Environment;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    Environment(String),
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub extraction: ExtractionSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub bundled_worker: bool,
    pub local_worker_path: PathBuf,
    #[serde(default)]
    pub remote_worker_base_url: Option<String>,
    #[serde(default)]
    pub worker_cache_dir: Option<PathBuf>,
    /// Deadline the CLI puts around a single extraction.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub title: String,
    pub font_size: f32,
    pub line_height_mm: f32,
    pub margin_mm: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Resolves the environment from `APP_ENVIRONMENT` and loads it.
    pub fn from_env() -> Result<(Environment, Self), SettingsError> {
        let environment = Environment::from_env().map_err(SettingsError::Environment)?;
        let settings = Self::load(environment)?;
        Ok((environment, settings))
    }

    /// Defaults, then `appsettings.{env}` if present, then `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.request_timeout_secs", 60_i64)?
            .set_default("extraction.bundled_worker", true)?
            .set_default("extraction.local_worker_path", DEFAULT_LOCAL_WORKER)?
            .set_default("export.title", "Cover Letter")?
            .set_default("export.font_size", 12.0)?
            .set_default("export.line_height_mm", 6.0)?
            .set_default("export.margin_mm", 20.0)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    pub fn extraction_timeout(&self) -> Option<Duration> {
        self.extraction.timeout_secs.map(Duration::from_secs)
    }

    pub fn page_layout(&self) -> PageLayout {
        PageLayout {
            font_size_pt: self.export.font_size,
            line_height_mm: self.export.line_height_mm,
            margin_mm: self.export.margin_mm,
            ..PageLayout::default()
        }
    }
}
