use std::path::Path;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use mm_types::Settings;

/// Load the settings snapshot: defaults, then the optional file, then the environment
///
/// Each value resolves on its own. Empty environment values and malformed
/// numbers fall back to that value's default. A missing file is skipped; an
/// unreadable or invalid one is reported as a [`ConfigError`].
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    build_settings(path, Environment::default())
}

fn build_settings(path: Option<&Path>, environment: Environment) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        // Missing file is skipped, the environment still applies
        builder = builder.add_source(File::from(path).required(false));
    }

    let config = builder.add_source(environment.ignore_empty(true)).build()?;

    config.try_deserialize()
}

/// Load settings with fallback to default
pub fn load_settings_or_default(path: Option<&Path>) -> Settings {
    match load_settings(path) {
        Ok(settings) => {
            tracing::info!("Loaded settings for {}", settings.symbol);
            settings
        }
        Err(err) => {
            tracing::warn!("Failed to load settings: {}. Using defaults.", err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use config::Map;

    use super::*;

    fn from_vars(path: Option<&Path>, vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let source: Map<String, String> = vars.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        build_settings(path, Environment::default().source(Some(source)))
    }

    #[test]
    fn test_defaults_when_environment_empty() {
        let settings = from_vars(None, &[]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_environment_overrides_and_coercion() {
        let settings = from_vars(
            None,
            &[
                ("SYMBOL", "BTC"),
                ("SPREAD_PERCENTAGE", "0.25"),
                ("ORDER_SIZE", "0.5"),
                ("UPDATE_INTERVAL_MS", "250"),
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("TELEGRAM_CHAT_ID", "-100200"),
                ("TELEGRAM_ENABLED", "true"),
            ],
        )
        .unwrap();

        assert_eq!(settings.symbol, "BTC");
        assert_eq!(settings.spread_percentage, 0.25);
        assert_eq!(settings.order_size, 0.5);
        assert_eq!(settings.update_interval_ms, 250);
        assert_eq!(settings.max_position_size, 1.0);
        assert_eq!(settings.telegram_bot_token, "123:abc");
        assert_eq!(settings.telegram_chat_id, "-100200");
        assert!(settings.telegram_enabled);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let settings = from_vars(None, &[("SYMBOL", ""), ("ORDER_SIZE", "")]).unwrap();
        assert_eq!(settings.symbol, "ETH");
        assert_eq!(settings.order_size, 0.01);
    }

    #[test]
    fn test_enabled_flag_requires_literal_true() {
        for raw in ["false", "1", "yes", "TRUE"] {
            let settings = from_vars(None, &[("TELEGRAM_ENABLED", raw)]).unwrap();
            assert!(!settings.telegram_enabled, "{raw} should not enable notifications");
        }
    }

    #[test]
    fn test_malformed_number_keeps_other_values() {
        let settings = from_vars(
            None,
            &[
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("TELEGRAM_CHAT_ID", "-1001"),
                ("TELEGRAM_ENABLED", "true"),
                ("SYMBOL", "BTC"),
                ("ORDER_SIZE", "lots"),
                ("SPREAD_PERCENTAGE", "0.25"),
            ],
        )
        .unwrap();

        assert_eq!(settings.order_size, 0.01);
        assert_eq!(settings.spread_percentage, 0.25);
        assert_eq!(settings.symbol, "BTC");
        assert_eq!(settings.telegram_bot_token, "123:abc");
        assert_eq!(settings.telegram_chat_id, "-1001");
        assert!(settings.telegram_enabled);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let settings = from_vars(Some(&dir.path().join("absent.toml")), &[("SYMBOL", "BTC"), ("TELEGRAM_ENABLED", "true")]).unwrap();
        assert_eq!(settings.symbol, "BTC");
        assert!(settings.telegram_enabled);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "symbol = ").unwrap();

        assert!(from_vars(Some(file.path()), &[]).is_err());
        assert_eq!(load_settings_or_default(Some(file.path())), Settings::default());
    }

    #[test]
    fn test_file_layer_below_environment() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "symbol = \"SOL\"\nmax_position_size = 5.0\ntelegram_enabled = true").unwrap();

        let settings = from_vars(Some(file.path()), &[("SYMBOL", "BTC")]).unwrap();
        assert_eq!(settings.symbol, "BTC");
        assert_eq!(settings.max_position_size, 5.0);
        assert!(settings.telegram_enabled);
    }
}
