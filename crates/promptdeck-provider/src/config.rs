//! Provider configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the prompt service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the prompt service
    pub endpoint: String,
    /// API key sent as a bearer token on every request
    pub api_key: String,
}

impl ProviderConfig {
    /// Create a new provider configuration
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}
