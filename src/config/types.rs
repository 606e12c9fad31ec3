//! Configuration types

use serde::{Deserialize, Serialize};

use crate::strategy::RawInput;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default run parameters
    #[serde(default)]
    pub strategy: StrategyDefaults,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Run parameters used when not given on the command line
///
/// Kept as text so they go through the same validation as interactive input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyDefaults {
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub payout_percent: Option<String>,
    #[serde(default)]
    pub total_trades: Option<String>,
    #[serde(default)]
    pub target_wins: Option<String>,
}

impl StrategyDefaults {
    /// Fill in any field the caller did not supply
    pub fn merge_into(&self, overrides: RawInput) -> RawInput {
        RawInput {
            capital: overrides.capital.or_else(|| self.capital.clone()),
            payout_percent: overrides.payout_percent.or_else(|| self.payout_percent.clone()),
            total_trades: overrides.total_trades.or_else(|| self.total_trades.clone()),
            target_wins: overrides.target_wins.or_else(|| self.target_wins.clone()),
        }
    }
}

/// How run results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Output format for reports
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overrides() {
        let defaults = StrategyDefaults {
            capital: Some("500".into()),
            payout_percent: Some("80".into()),
            total_trades: Some("12".into()),
            target_wins: None,
        };
        let merged = defaults.merge_into(RawInput {
            capital: Some("100".into()),
            target_wins: Some("4".into()),
            ..RawInput::default()
        });

        assert_eq!(merged, RawInput::new("100", "80", "12", "4"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.output, OutputFormat::Text);
    }
}
