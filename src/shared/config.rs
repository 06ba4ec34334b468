//! Application configuration. Endpoint address and offline mode.

use serde::Deserialize;

/// Default simulated latency for the offline gateway.
pub const DEFAULT_MOCK_DELAY_MS: u64 = 100;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base address of the greeting service. Read from GREETING_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Serve a canned greeting instead of calling the network. Read from GREETING_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,

    /// Simulated latency of the offline gateway. Read from GREETING_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(Self::environment());
        if let Ok(path) = std::env::var("GREETING_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// `GREETING_*` variables; numbers and booleans are parsed from their text.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("GREETING").try_parsing(true)
    }

    /// Returns the configured base address, if one is set and not blank.
    pub fn base_url_override(&self) -> Option<String> {
        self.base_url.clone().filter(|u| !u.trim().is_empty())
    }

    /// Returns true if the offline gateway should be used.
    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_override_and_stay_online() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.base_url_override(), None);
        assert!(!cfg.is_offline());
        assert_eq!(cfg.mock_delay_ms_or_default(), DEFAULT_MOCK_DELAY_MS);
    }

    #[test]
    fn blank_base_url_is_not_an_override() {
        let cfg = AppConfig {
            base_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.base_url_override(), None);
    }

    #[test]
    fn reads_prefixed_environment_variables() {
        let mut vars = config::Map::new();
        vars.insert("GREETING_BASE_URL".to_string(), "http://h:1".to_string());
        vars.insert("GREETING_OFFLINE".to_string(), "true".to_string());
        vars.insert("GREETING_MOCK_DELAY_MS".to_string(), "7".to_string());
        vars.insert("GREETING_CONFIG".to_string(), "ignored.toml".to_string());
        vars.insert("OTHER_OFFLINE".to_string(), "false".to_string());

        let cfg: AppConfig = config::Config::builder()
            .add_source(AppConfig::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.base_url_override().as_deref(), Some("http://h:1"));
        assert!(cfg.is_offline());
        assert_eq!(cfg.mock_delay_ms_or_default(), 7);
    }

    #[test]
    fn deserializes_from_config_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("base_url", "http://localhost:9000")
            .unwrap()
            .set_override("offline", true)
            .unwrap()
            .set_override("mock_delay_ms", 5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.base_url_override().as_deref(), Some("http://localhost:9000"));
        assert!(cfg.is_offline());
        assert_eq!(cfg.mock_delay_ms_or_default(), 5);
    }
}
