mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ApiSettings, ExportSettings, ExtractionSettings, LoggingSettings, Settings, SettingsError,
};
