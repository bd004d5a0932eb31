use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use infura_gas::{ClientOption, InfuraGasClient, BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Gas API connection settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Infura API key
    pub api_key: String,
    /// API key secret; empty means the key goes in the URL path
    pub api_key_secret: String,
    /// Base URL (default: https://gas.api.infura.io)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Print HTTP request/response details
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_key_secret: String::new(),
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, a config file and environment variables.
    ///
    /// The file is `config_file` if given, otherwise `INFURA_GAS_CONFIG_FILE`,
    /// otherwise any of `config/default`, `infura-gas` and
    /// `<config dir>/infura-gas/config` that exist.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let env_file = std::env::var("INFURA_GAS_CONFIG_FILE").ok();
        if let Some(path) = config_file.or(env_file.as_deref().map(Path::new)) {
            return Self::from_file(path);
        }

        let mut builder = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("infura-gas").required(false));

        if let Some(dir) = dirs::config_dir() {
            builder = builder
                .add_source(File::from(dir.join("infura-gas").join("config")).required(false));
        }

        builder.add_source(Self::environment()).build()?.try_deserialize()
    }

    /// Load configuration from a specific file, which must exist
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from(path.as_ref()))
            // Still allow environment overrides
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.api_key", "")?
            .set_default("api.api_key_secret", "")?
            .set_default("api.base_url", BASE_URL)?
            .set_default("api.timeout_secs", 30)?
            .set_default("api.debug", false)
    }

    // INFURA_GAS_API__API_KEY -> api.api_key
    fn environment() -> Environment {
        Environment::with_prefix("INFURA_GAS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Build the gas API client described by this configuration
    pub fn to_client(&self) -> infura_gas::Result<InfuraGasClient> {
        InfuraGasClient::with_options(
            self.api.api_key.clone(),
            self.api.api_key_secret.clone(),
            [
                ClientOption::BaseUrl(self.api.base_url.clone()),
                ClientOption::Timeout(Duration::from_secs(self.api.timeout_secs)),
                ClientOption::Debug(self.api.debug),
            ],
        )
    }
}
