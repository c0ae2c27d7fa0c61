use crate::resource::TraceRoot;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::sync::OnceLock;

/// Directory holding the bundled traces, one sub-directory per suite.
pub const BUNDLED_TRACE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/traces");

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub resources: ResourceSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourceSettings {
    pub root: TraceRoot,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Full,
    Compact,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // Later sources override earlier ones; every file is optional.
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // TEST_TRACES__RESOURCES__ROOT and friends win over every file
            .add_source(Environment::with_prefix("TEST_TRACES").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Process-wide settings, loaded on first use and never reloaded.
    pub fn shared() -> Result<&'static Self, ConfigError> {
        static SHARED: OnceLock<Result<Settings, String>> = OnceLock::new();
        SHARED
            .get_or_init(|| Self::new().map_err(|err| err.to_string()))
            .as_ref()
            .map_err(|message| ConfigError::Message(message.clone()))
    }

    /// Defaults overlaid with a single, required configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("resources.root", BUNDLED_TRACE_ROOT)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "full")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_shared_settings_are_loaded_once() {
        let first = Settings::shared().unwrap();
        let second = Settings::shared().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[resources]\nroot = \"/srv/traces\"\n\n[logging]\nformat = \"compact\""
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.resources.root.as_str(), "/srv/traces");
        assert_eq!(settings.logging.format, LogFormat::Compact);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_defaults_point_at_bundled_traces() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.resources.root.as_str(), BUNDLED_TRACE_ROOT);
        assert_eq!(settings.logging.format, LogFormat::Full);
    }

    #[test]
    fn test_empty_root_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[resources]\nroot = \"\"").unwrap();
        assert!(Settings::from_file(file.path()).is_err());
    }
}
