//! OpenRouter LLM Gateway implementation
//!
//! All models are reached through the OpenRouter chat-completions API,
//! including Anthropic models (their `anthropic:` prefix is rewritten
//! to OpenRouter's `anthropic/` namespace).

use async_trait::async_trait;
use council_application::ports::llm_gateway::{GatewayError, LlmGateway};
use council_domain::ModelId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Environment variables probed for the API key, in order
const API_KEY_VARS: &[&str] = &["OPENROUTER_API_KEY", "COUNCIL_OPENROUTER_API_KEY"];

/// Per-call request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// LLM Gateway implementation backed by the OpenRouter API
pub struct OpenRouterGateway {
    client: reqwest::Client,
    api_key: String,
}

impl OpenRouterGateway {
    /// Create a gateway from the environment.
    ///
    /// Reads `OPENROUTER_API_KEY`, then `COUNCIL_OPENROUTER_API_KEY`.
    /// Fails before any network call when neither is set.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
            .ok_or(GatewayError::MissingCredentials)?;

        Ok(Self::new(api_key))
    }

    /// Create a gateway with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        info!("OpenRouterGateway initialized");

        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Map a provider-scoped model id onto OpenRouter's namespace.
    ///
    /// `openrouter:` prefixes are stripped; `anthropic:` prefixes are
    /// rewritten to `anthropic/`. Anything else passes through as-is.
    fn normalize_model(model: &ModelId) -> String {
        let id = model.as_str();
        if let Some(stripped) = id.strip_prefix("openrouter:") {
            return stripped.to_string();
        }
        if let Some(stripped) = id.strip_prefix("anthropic:") {
            return format!("anthropic/{}", stripped);
        }
        id.to_string()
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn query(
        &self,
        prompt: &str,
        model: &ModelId,
        temperature: f32,
    ) -> Result<String, GatewayError> {
        let model_id = Self::normalize_model(model);
        debug!("Querying {} at temperature {}", model_id, temperature);

        let request = ChatRequest {
            model: &model_id,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
        };

        let response = self
            .client
            .post(OPENROUTER_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                excerpt
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::MalformedResponse("no choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_openrouter_prefix() {
        let model = ModelId::new("openrouter:deepseek/deepseek-v3.2");
        assert_eq!(
            OpenRouterGateway::normalize_model(&model),
            "deepseek/deepseek-v3.2"
        );
    }

    #[test]
    fn test_normalize_rewrites_anthropic_prefix() {
        let model = ModelId::new("anthropic:claude-sonnet-4-5-20250929");
        assert_eq!(
            OpenRouterGateway::normalize_model(&model),
            "anthropic/claude-sonnet-4-5-20250929"
        );
    }

    #[test]
    fn test_normalize_passes_bare_ids_through() {
        let model = ModelId::new("mistralai/mistral-large");
        assert_eq!(
            OpenRouterGateway::normalize_model(&model),
            "mistralai/mistral-large"
        );
    }

    #[test]
    fn test_chat_request_serializes_to_api_shape() {
        let request = ChatRequest {
            model: "deepseek/deepseek-v3.2",
            messages: vec![ChatMessage {
                role: "user",
                content: "Review this plan.",
            }],
            temperature: 0.7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "deepseek/deepseek-v3.2");
        assert_eq!(json["messages"][0]["role"], "user");
        let temperature = json["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }
}
