//! Configuration for MistralBrain.

use std::env;
use std::time::Duration;

use bot_core::BrainError;

/// Configuration for MistralBrain.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    /// Mistral API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 1.0).
    pub temperature: Option<f32>,

    /// Whole-request timeout. Expired requests surface as
    /// [`BrainError::Timeout`] and the pipeline apologizes to the user.
    pub timeout: Duration,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.mistral.ai".to_string(),
            api_key: String::new(),
            model: "mistral-small".to_string(),
            max_tokens: None,
            temperature: None,
            timeout: Duration::from_secs(18),
        }
    }
}

impl MistralConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MISTRAL_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `MISTRAL_URL` - API base URL (default: https://api.mistral.ai)
    /// - `MISTRAL_MODEL` - Model name (default: mistral-small)
    /// - `MISTRAL_MAX_TOKENS` - Max tokens (unset by default)
    /// - `MISTRAL_TEMPERATURE` - Temperature (unset by default)
    /// - `MISTRAL_TIMEOUT_SECS` - Request timeout in seconds (default: 18)
    pub fn from_env() -> Result<Self, BrainError> {
        let api_key = env::var("MISTRAL_API_KEY")
            .map_err(|_| BrainError::Configuration("MISTRAL_API_KEY not set".to_string()))?;

        let api_url =
            env::var("MISTRAL_URL").unwrap_or_else(|_| "https://api.mistral.ai".to_string());

        let model = env::var("MISTRAL_MODEL").unwrap_or_else(|_| "mistral-small".to_string());

        let max_tokens = env::var("MISTRAL_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let temperature = env::var("MISTRAL_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout = env::var("MISTRAL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(18));

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> MistralConfigBuilder {
        MistralConfigBuilder::default()
    }
}

/// Builder for MistralConfig.
#[derive(Debug, Default)]
pub struct MistralConfigBuilder {
    config: MistralConfig,
}

impl MistralConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> MistralConfig {
        self.config
    }
}
