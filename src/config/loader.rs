//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{AppError, Result};

/// Prefix for environment overrides, e.g. `MASANIELLO__STRATEGY__CAPITAL`
const ENV_PREFIX: &str = "MASANIELLO";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with MASANIELLO__)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    // Try to load from .env file
    dotenvy::dotenv().ok();

    load_with_env(config_path, env_source())
}

fn env_source() -> Environment {
    // Numbers stay strings here; RawInput::parse validates them
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

fn load_with_env(config_path: Option<&str>, env: Environment) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(env);

    let config = builder
        .build()
        .map_err(|e| AppError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| AppError::Configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OutputFormat;
    use std::io::Write;

    /// Environment source that ignores the real process environment
    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        env_source().source(Some(map))
    }

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "masaniello-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_with_env(Some("does-not-exist.toml"), env_from(&[])).unwrap();
        assert_eq!(config.settings.output, OutputFormat::Text);
        assert_eq!(config.settings.log_level, "info");
        assert_eq!(config.strategy.capital, None);
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = write_temp_config(
            "file",
            "[strategy]\ncapital = \"250\"\npayout_percent = \"85\"\n\n[settings]\noutput = \"json\"\nlog_level = \"debug\"\n",
        );

        let config = load_with_env(path.to_str(), env_from(&[])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.strategy.capital.as_deref(), Some("250"));
        assert_eq!(config.strategy.payout_percent.as_deref(), Some("85"));
        assert_eq!(config.strategy.total_trades, None);
        assert_eq!(config.settings.output, OutputFormat::Json);
        assert_eq!(config.settings.log_level, "debug");
    }

    #[test]
    fn test_env_overrides_file() {
        let path = write_temp_config("env", "[strategy]\ncapital = \"250\"\ntarget_wins = \"3\"\n");

        let config = load_with_env(
            path.to_str(),
            env_from(&[
                ("MASANIELLO__STRATEGY__CAPITAL", "400"),
                ("MASANIELLO__SETTINGS__OUTPUT", "json"),
            ]),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.strategy.capital.as_deref(), Some("400"));
        assert_eq!(config.strategy.target_wins.as_deref(), Some("3"));
        assert_eq!(config.settings.output, OutputFormat::Json);
    }
}
