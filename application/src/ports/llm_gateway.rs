//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use council_domain::ModelId;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing API credentials")]
    MissingCredentials,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer queries LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
///
/// One call, one completion: the orchestrator never holds provider
/// sessions across stages. A gateway error does not abort a council
/// run; the orchestrator converts it into inline `ERROR: ...` response
/// text so the failure stays visible to later stages.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt to the given model and return the response text
    async fn query(
        &self,
        prompt: &str,
        model: &ModelId,
        temperature: f32,
    ) -> Result<String, GatewayError>;
}
