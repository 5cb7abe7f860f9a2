//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Payment provider configuration.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Payment provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Use the sandbox gateway instead of production.
    #[serde(default)]
    pub testing: bool,
    /// Production gateway base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sandbox gateway base URL.
    #[serde(default = "default_sandbox_base_url")]
    pub sandbox_base_url: String,
    /// Bill lifetime used when the caller does not pass one, in seconds.
    #[serde(default = "default_bill_lifetime")]
    pub default_bill_lifetime_secs: u32,
}

fn default_base_url() -> String {
    "https://gw.b2binpay.com".to_string()
}

fn default_sandbox_base_url() -> String {
    "https://gw-test.b2binpay.com".to_string()
}

fn default_bill_lifetime() -> u32 {
    1200 // 20 minutes
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            testing: false,
            base_url: default_base_url(),
            sandbox_base_url: default_sandbox_base_url(),
            default_bill_lifetime_secs: default_bill_lifetime(),
        }
    }
}

impl ProviderConfig {
    /// Returns the gateway base URL for the configured mode, without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        let base = if self.testing {
            &self.sandbox_base_url
        } else {
            &self.base_url
        };
        base.trim_end_matches('/')
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINAGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Loads a `.env` file if present, then the regular configuration sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_with_dotenv() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }
}
