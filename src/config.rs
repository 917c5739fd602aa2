use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PROMPT_STYLE: &str = "creative and unique";
pub const DEFAULT_PROMPT_LENGTH: &str = "one short sentence";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind host {host:?}")]
    InvalidHost { host: String },
    #[error("failed to load template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
    #[error(transparent)]
    Client(#[from] crate::completion::CompletionError),
}

/// Settings for the outbound completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_ms: Option<u64>,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            temperature: None,
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub completion: CompletionSettings,
    pub prompt: String,
    pub template: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable numbers
    /// fall back to their defaults, blank strings count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let completion = CompletionSettings {
            api_key: var("OPENAI_API_KEY"),
            base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: var("GREETER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: var("GREETER_MAX_TOKENS").and_then(|v| v.parse::<u32>().ok()),
            temperature: var("GREETER_TEMPERATURE").and_then(|v| v.parse::<f32>().ok()),
            timeout_ms: var("GREETER_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()),
        };

        let prompt = var("GREETER_PROMPT").unwrap_or_else(|| {
            let style = var("GREETER_PROMPT_STYLE").unwrap_or_else(|| DEFAULT_PROMPT_STYLE.to_string());
            let length =
                var("GREETER_PROMPT_LENGTH").unwrap_or_else(|| DEFAULT_PROMPT_LENGTH.to_string());
            crate::prompt::compose(&style, &length)
        });

        Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: var("PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            completion,
            prompt,
            template: var("GREETER_TEMPLATE").map(PathBuf::from),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost {
                host: self.host.clone(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
