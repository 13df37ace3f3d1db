//! MistralBrain implementation using the Mistral chat-completions API.

use bot_core::{async_trait, BrainError, ChatBackend, ChatMessage};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::MistralConfig;

/// A completion backend that talks to the Mistral API.
///
/// Stateless per request: the caller supplies the full message list. The
/// HTTP client enforces the configured whole-request timeout, so a hung
/// upstream surfaces as [`BrainError::Timeout`] rather than blocking the
/// pipeline indefinitely.
pub struct MistralBrain {
    client: Client,
    config: MistralConfig,
}

impl MistralBrain {
    /// Create a new MistralBrain with the given configuration.
    pub fn new(config: MistralConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                BrainError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Create a MistralBrain from environment variables.
    ///
    /// See [`MistralConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        let config = MistralConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &MistralConfig {
        &self.config
    }

    /// Make a chat completion request to the Mistral API.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, BrainError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to Mistral API: model={}", request.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BrainError::Timeout
                } else {
                    BrainError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(BrainError::Unavailable(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.message
                )));
            }

            return Err(BrainError::Unavailable(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            BrainError::ProcessingFailed(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion)
    }
}

#[async_trait]
impl ChatBackend for MistralBrain {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError> {
        let completion = self.chat_completion(messages).await?;

        let reply = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| {
                warn!("Completion {} carried no content", completion.id);
                BrainError::ProcessingFailed("empty completion".to_string())
            })?
            .to_string();

        if let Some(usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(reply)
    }

    fn name(&self) -> &str {
        "MistralBrain"
    }
}
