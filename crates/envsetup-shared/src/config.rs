//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_BUNDLE_SYMBOLIC_NAME;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub upgrade: UpgradeSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Settings handed to the step registrator.
#[derive(Debug, Deserialize, Clone)]
pub struct UpgradeSettings {
    pub bundle_symbolic_name: String,
}

/// Initial content of the in-memory portal the host binary upgrades.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedSettings {
    pub tenant_web_id: String,
    pub admin_email: String,
    pub admin_first_name: String,
    pub admin_last_name: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::builder(&env)?.build()?.try_deserialize()
    }

    fn builder(
        env: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", "envsetup-host")?
            .set_default("app.log_format", "json")?
            .set_default("upgrade.bundle_symbolic_name", DEFAULT_BUNDLE_SYMBOLIC_NAME)?
            .set_default("seed.tenant_web_id", "liferay.com")?
            .set_default("seed.admin_email", "test@liferay.com")?
            .set_default("seed.admin_first_name", "Test")?
            .set_default("seed.admin_last_name", "Test")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::builder("test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.env, "test");
        assert_eq!(config.app.log_format, LogFormat::Json);
        assert_eq!(config.upgrade.bundle_symbolic_name, DEFAULT_BUNDLE_SYMBOLIC_NAME);
        assert_eq!(config.seed.admin_first_name, "Test");
    }
}
