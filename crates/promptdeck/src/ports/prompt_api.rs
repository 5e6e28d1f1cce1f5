//! Prompt API Port
//!
//! Abstract interface for the remote prompt service. One method per
//! endpoint; each call is a single request/response round-trip with no
//! retries or caching at this layer.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Prompt, PromptVersion, ProviderError, Visibility};

/// Body for creating a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePromptRequest {
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// Body for a partial prompt update. Absent fields are left untouched
/// by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePromptRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// Remote prompt service surface
#[async_trait]
pub trait PromptApi: Send + Sync {
    /// Fetch a prompt by id. `Ok(None)` means the entity does not exist
    /// on the service, which is distinct from any other failure.
    async fn get_prompt(&self, id: Uuid) -> Result<Option<Prompt>, ProviderError>;

    /// Fetch the full, unfiltered prompt list.
    async fn list_prompts(&self) -> Result<Vec<Prompt>, ProviderError>;

    /// Create a prompt; the service assigns the id.
    async fn create_prompt(&self, req: CreatePromptRequest) -> Result<Prompt, ProviderError>;

    /// Partially update a prompt.
    async fn update_prompt(
        &self,
        id: Uuid,
        req: UpdatePromptRequest,
    ) -> Result<(), ProviderError>;

    /// Revert a prompt's content to a previously recorded version.
    async fn rollback_prompt(&self, id: Uuid, version_id: Uuid) -> Result<(), ProviderError>;

    /// Delete a prompt. Deleting an entity that is already gone succeeds.
    async fn delete_prompt(&self, id: Uuid) -> Result<(), ProviderError>;

    /// List all versions of a prompt, in the order the service returns
    /// them. The order is not guaranteed to be chronological.
    async fn get_prompt_versions(
        &self,
        prompt_id: Uuid,
    ) -> Result<Vec<PromptVersion>, ProviderError>;
}
