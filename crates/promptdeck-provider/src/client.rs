//! Prompt service API client
//!
//! Thin typed wrapper over the service's REST surface. One method per
//! endpoint; no retries, no caching. Timeout and transport policy are
//! whatever the underlying reqwest client provides.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use promptdeck::domain::{Prompt, PromptVersion, ProviderError};
use promptdeck::ports::{CreatePromptRequest, PromptApi, UpdatePromptRequest};

use crate::config::ProviderConfig;

#[derive(Debug, Serialize)]
struct RollbackPromptRequest {
    version_id: Uuid,
}

/// HTTP client for the prompt service
pub struct PromptServiceClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PromptServiceClient {
    /// Create a new API client
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool, ProviderError> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Api(format!("Failed to connect to prompt service: {}", e)))?;
        Ok(resp.status().is_success())
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ProviderError> {
        req.header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| ProviderError::Api(format!("Failed to connect to prompt service: {}", e)))
    }

    fn check_status(
        operation: &'static str,
        expected: StatusCode,
        resp: Response,
    ) -> Result<Response, ProviderError> {
        if resp.status() != expected {
            return Err(ProviderError::unexpected_status(
                operation,
                expected.as_u16(),
                resp.status().as_u16(),
            ));
        }
        Ok(resp)
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ProviderError> {
        resp.json()
            .await
            .map_err(|e| ProviderError::Api(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PromptApi for PromptServiceClient {
    async fn get_prompt(&self, id: Uuid) -> Result<Option<Prompt>, ProviderError> {
        let url = format!("{}/api/prompts/{}", self.base_url, id);
        debug!(prompt_id = %id, "Fetching prompt");

        let resp = self.send(self.client.get(&url)).await?;

        // A missing entity is a distinct outcome, not a failure: the
        // caller decides whether it means "recreate" or "error".
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::check_status("get prompt", StatusCode::OK, resp)?;

        Ok(Some(Self::parse(resp).await?))
    }

    async fn list_prompts(&self) -> Result<Vec<Prompt>, ProviderError> {
        let url = format!("{}/api/prompts", self.base_url);
        debug!("Listing prompts");

        let resp = self.send(self.client.get(&url)).await?;
        let resp = Self::check_status("list prompts", StatusCode::OK, resp)?;

        Self::parse(resp).await
    }

    async fn create_prompt(&self, req: CreatePromptRequest) -> Result<Prompt, ProviderError> {
        let url = format!("{}/api/prompts", self.base_url);
        debug!(name = %req.name, "Creating prompt");

        let resp = self.send(self.client.post(&url).json(&req)).await?;
        let resp = Self::check_status("create prompt", StatusCode::CREATED, resp)?;

        Self::parse(resp).await
    }

    async fn update_prompt(
        &self,
        id: Uuid,
        req: UpdatePromptRequest,
    ) -> Result<(), ProviderError> {
        let url = format!("{}/api/prompts/{}", self.base_url, id);
        debug!(prompt_id = %id, "Updating prompt");

        let resp = self.send(self.client.patch(&url).json(&req)).await?;
        Self::check_status("update prompt", StatusCode::OK, resp)?;

        Ok(())
    }

    async fn rollback_prompt(&self, id: Uuid, version_id: Uuid) -> Result<(), ProviderError> {
        let url = format!("{}/api/prompts/{}/rollback", self.base_url, id);
        debug!(prompt_id = %id, version_id = %version_id, "Rolling back prompt");

        let body = RollbackPromptRequest { version_id };
        let resp = self.send(self.client.post(&url).json(&body)).await?;
        Self::check_status("rollback prompt", StatusCode::OK, resp)?;

        Ok(())
    }

    async fn delete_prompt(&self, id: Uuid) -> Result<(), ProviderError> {
        let url = format!("{}/api/prompts/{}", self.base_url, id);
        debug!(prompt_id = %id, "Deleting prompt");

        let resp = self.send(self.client.delete(&url)).await?;

        // Deleting an entity that is already gone counts as done.
        if resp.status() == StatusCode::NOT_FOUND {
            debug!(prompt_id = %id, "Prompt already deleted");
            return Ok(());
        }
        Self::check_status("delete prompt", StatusCode::NO_CONTENT, resp)?;

        Ok(())
    }

    async fn get_prompt_versions(
        &self,
        prompt_id: Uuid,
    ) -> Result<Vec<PromptVersion>, ProviderError> {
        let url = format!("{}/api/prompts/{}/versions", self.base_url, prompt_id);
        debug!(prompt_id = %prompt_id, "Fetching prompt versions");

        let resp = self.send(self.client.get(&url)).await?;
        let resp = Self::check_status("list prompt versions", StatusCode::OK, resp)?;

        Self::parse(resp).await
    }
}
