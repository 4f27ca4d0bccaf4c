//! OpenRouter gateway adapter

pub mod gateway;

pub use gateway::OpenRouterGateway;
