use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;

pub const DEFAULT_SPREAD_PERCENTAGE: f64 = 0.1;
pub const DEFAULT_ORDER_SIZE: f64 = 0.01;
pub const DEFAULT_MAX_POSITION_SIZE: f64 = 1.0;
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_PRICE_TICK_SIZE: f64 = 0.01;

/// Process-wide settings snapshot
///
/// Field names match the lowercased environment keys so the snapshot can be
/// deserialized straight from the environment or a flat TOML file. Each field
/// resolves on its own: a malformed number falls back to that field's default
/// and leaves every other field untouched.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hyperliquid_api_url: String,
    pub hyperliquid_ws_url: String,
    pub private_key: String,
    pub symbol: String,
    pub base_url: String,

    /// Quoted spread, in percent
    #[serde(deserialize_with = "spread_percentage")]
    pub spread_percentage: f64,
    #[serde(deserialize_with = "order_size")]
    pub order_size: f64,
    #[serde(deserialize_with = "max_position_size")]
    pub max_position_size: f64,
    #[serde(deserialize_with = "update_interval_ms")]
    pub update_interval_ms: u64,
    #[serde(deserialize_with = "price_tick_size")]
    pub price_tick_size: f64,

    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    #[serde(deserialize_with = "enabled_flag")]
    pub telegram_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hyperliquid_api_url: "https://api.hyperliquid.xyz".to_string(),
            hyperliquid_ws_url: "wss://api.hyperliquid.xyz/ws".to_string(),
            private_key: String::new(),
            symbol: "ETH".to_string(),
            base_url: "https://api.hyperliquid.xyz".to_string(),
            spread_percentage: DEFAULT_SPREAD_PERCENTAGE,
            order_size: DEFAULT_ORDER_SIZE,
            max_position_size: DEFAULT_MAX_POSITION_SIZE,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            price_tick_size: DEFAULT_PRICE_TICK_SIZE,
            telegram_bot_token: String::new(),
            telegram_chat_id: String::new(),
            telegram_enabled: false,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("hyperliquid_api_url", &self.hyperliquid_api_url)
            .field("hyperliquid_ws_url", &self.hyperliquid_ws_url)
            .field("private_key", &redact(&self.private_key))
            .field("symbol", &self.symbol)
            .field("base_url", &self.base_url)
            .field("spread_percentage", &self.spread_percentage)
            .field("order_size", &self.order_size)
            .field("max_position_size", &self.max_position_size)
            .field("update_interval_ms", &self.update_interval_ms)
            .field("price_tick_size", &self.price_tick_size)
            .field("telegram_bot_token", &redact(&self.telegram_bot_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("telegram_enabled", &self.telegram_enabled)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Only the literal string `true` turns notifications on
fn enabled_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw == "true")
}

/// A number as it arrives from a source: typed from TOML, text from the environment
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber<T> {
    Typed(T),
    Text(String),
}

fn number_or<'de, D, T>(deserializer: D, default: T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    Ok(match RawNumber::<T>::deserialize(deserializer)? {
        RawNumber::Typed(value) => value,
        RawNumber::Text(raw) => raw.trim().parse().unwrap_or(default),
    })
}

fn spread_percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    number_or(deserializer, DEFAULT_SPREAD_PERCENTAGE)
}

fn order_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    number_or(deserializer, DEFAULT_ORDER_SIZE)
}

fn max_position_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    number_or(deserializer, DEFAULT_MAX_POSITION_SIZE)
}

fn update_interval_ms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    number_or(deserializer, DEFAULT_UPDATE_INTERVAL_MS)
}

fn price_tick_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    number_or(deserializer, DEFAULT_PRICE_TICK_SIZE)
}

#[cfg(test)]
mod tests {
    use serde::de::IntoDeserializer;
    use serde::de::value::Error;
    use serde::de::value::StrDeserializer;

    use super::*;

    fn text(raw: &str) -> StrDeserializer<'_, Error> {
        raw.into_deserializer()
    }

    #[test]
    fn test_numbers_parse_from_text() {
        assert_eq!(order_size(text("0.5")).unwrap(), 0.5);
        assert_eq!(update_interval_ms(text(" 250 ")).unwrap(), 250);
    }

    #[test]
    fn test_malformed_number_falls_back_to_field_default() {
        assert_eq!(order_size(text("lots")).unwrap(), DEFAULT_ORDER_SIZE);
        assert_eq!(spread_percentage(text("wide")).unwrap(), DEFAULT_SPREAD_PERCENTAGE);
        assert_eq!(update_interval_ms(text("-5")).unwrap(), DEFAULT_UPDATE_INTERVAL_MS);
        assert_eq!(price_tick_size(text("")).unwrap(), DEFAULT_PRICE_TICK_SIZE);
    }

    #[test]
    fn test_typed_numbers_pass_through() {
        let value: serde::de::value::F64Deserializer<Error> = 5.0_f64.into_deserializer();
        assert_eq!(max_position_size(value).unwrap(), 5.0);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.symbol, "ETH");
        assert_eq!(settings.spread_percentage, 0.1);
        assert_eq!(settings.order_size, 0.01);
        assert_eq!(settings.max_position_size, 1.0);
        assert_eq!(settings.update_interval_ms, 1000);
        assert_eq!(settings.price_tick_size, 0.01);
        assert!(!settings.telegram_enabled);
        assert!(settings.telegram_bot_token.is_empty());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = Settings {
            private_key: "0xdeadbeef".to_string(),
            telegram_bot_token: "123:abc".to_string(),
            ..Settings::default()
        };

        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("0xdeadbeef"));
        assert!(!rendered.contains("123:abc"));
        assert!(rendered.contains("<redacted>"));
    }
}
