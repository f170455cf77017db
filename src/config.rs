use std::{env, fmt, net::SocketAddr};

use thiserror::Error;

use crate::constants::{BASE_API_URL, DEFAULT_BIND_ADDRESS, ENDPOINT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variables: Please check LANGFLOW_ID and APP_TOKEN.")]
    Missing { variables: Vec<&'static str> },
    #[error("BIND_ADDRESS `{0}` is not a valid socket address.")]
    InvalidBindAddress(String),
}

/// Process configuration. Read once at startup and never reloaded.
#[derive(Clone)]
pub struct Config {
    pub langflow_id: String,
    /// Loaded for parity with the deployment environment. Not sent anywhere.
    pub flow_id: String,
    pub app_token: String,
    pub base_url: String,
    pub endpoint: String,
    pub bind_address: SocketAddr,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Values are trimmed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };

        let langflow_id = read("LANGFLOW_ID");
        let flow_id = read("FLOW_ID");
        let app_token = read("APP_TOKEN");

        let mut missing = vec![];

        if langflow_id.is_empty() {
            missing.push("LANGFLOW_ID");
        }

        if app_token.is_empty() {
            missing.push("APP_TOKEN");
        }

        if !missing.is_empty() {
            return Err(ConfigError::Missing { variables: missing });
        }

        let base_url = match read("LANGFLOW_BASE_URL") {
            url if url.is_empty() => BASE_API_URL.to_string(),
            url => url.trim_end_matches('/').to_string(),
        };

        let bind_address = match read("BIND_ADDRESS") {
            address if address.is_empty() => DEFAULT_BIND_ADDRESS.to_string(),
            address => address,
        };
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddress(bind_address.clone()))?;

        let debug = match read("DEBUG") {
            value if value.is_empty() => true,
            value => value == "true",
        };

        Ok(Self {
            langflow_id,
            flow_id,
            app_token,
            base_url,
            endpoint: ENDPOINT.to_string(),
            bind_address,
            debug,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("langflow_id", &self.langflow_id)
            .field("flow_id", &self.flow_id)
            .field("app_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("endpoint", &self.endpoint)
            .field("bind_address", &self.bind_address)
            .field("debug", &self.debug)
            .finish()
    }
}

pub fn is_debug() -> bool {
    env::var("DEBUG").unwrap_or("true".to_string()) == "true"
}

/// Loads `.env`, plus `dev.env` when running in debug. Existing variables win.
pub fn load_dotenv(debug: bool) {
    dotenv::dotenv().ok();

    if debug {
        dotenv::from_filename("dev.env").ok();
    }
}
