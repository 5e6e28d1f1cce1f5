//! Prompts resource
//!
//! Maps one declarative `prompts` block onto Create/Read/Update/Delete
//! calls, including the rollback update path that reverts content to a
//! prior version.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use promptdeck::domain::{Prompt, ProviderError, Visibility};
use promptdeck::ports::{CreatePromptRequest, PromptApi, UpdatePromptRequest};

use crate::schema::{Attribute, AttributeType, Schema};

/// Declarative model for one managed prompt.
///
/// `id` is computed by the service. `version_id` is an update-time
/// rollback instruction only; it is never remote state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptResourceModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<Uuid>,
}

impl PromptResourceModel {
    fn refresh_from(&self, prompt: Prompt) -> Self {
        Self {
            id: Some(prompt.id),
            name: prompt.name,
            content: prompt.content,
            description: prompt.description,
            tags: prompt.tags,
            visibility: Some(prompt.visibility),
            version_id: self.version_id,
        }
    }

    fn require_id(&self, what: &str) -> Result<Uuid, ProviderError> {
        self.id.ok_or_else(|| {
            ProviderError::InvalidConfiguration(format!(
                "Cannot {} a prompt without a stored 'id'",
                what
            ))
        })
    }
}

/// Outcome of refreshing a managed prompt from the service.
#[derive(Debug)]
pub enum ReadOutcome {
    /// The prompt still exists; state was refreshed from the server record.
    Current(PromptResourceModel),
    /// The remote entity no longer exists. The caller plans a recreate
    /// instead of treating the refresh as a failure.
    Removed,
}

/// How an apply mutates the remote prompt, decided once from the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Revert content to the named version's snapshot.
    Rollback(Uuid),
    /// Send the configured fields as a partial update.
    Fields(UpdatePromptRequest),
}

impl UpdateAction {
    /// Classify a plan. A set `version_id` always requests a rollback,
    /// regardless of any other changed fields in the same plan.
    pub fn from_plan(plan: &PromptResourceModel) -> Self {
        match plan.version_id {
            Some(version_id) => UpdateAction::Rollback(version_id),
            None => UpdateAction::Fields(UpdatePromptRequest {
                name: Some(plan.name.clone()),
                content: Some(plan.content.clone()),
                description: plan.description.clone(),
                tags: (!plan.tags.is_empty()).then(|| plan.tags.clone()),
                visibility: plan.visibility,
            }),
        }
    }
}

/// Managed prompt resource
pub struct PromptResource {
    api: Arc<dyn PromptApi>,
}

impl PromptResource {
    /// Configure the resource with a service client handle
    pub fn new(api: Arc<dyn PromptApi>) -> Self {
        Self { api }
    }

    /// Attribute schema for a `prompts` block
    pub fn schema() -> Schema {
        Schema {
            description: "Manages a prompt, including creation, versioning, and rollback.",
            attributes: vec![
                Attribute::computed("id", AttributeType::String, "Prompt identifier"),
                Attribute::required("name", AttributeType::String, "The name of the prompt"),
                Attribute::optional(
                    "description",
                    AttributeType::String,
                    "Description of the prompt",
                ),
                Attribute::required(
                    "content",
                    AttributeType::String,
                    "The content of the prompt",
                ),
                Attribute::optional(
                    "tags",
                    AttributeType::StringList,
                    "List of tags for the prompt",
                ),
                Attribute::optional(
                    "visibility",
                    AttributeType::String,
                    "Visibility of the prompt (public or private)",
                ),
                Attribute::optional(
                    "version_id",
                    AttributeType::String,
                    "Version ID for rollback",
                ),
            ],
        }
    }

    /// Create the remote prompt and return the state to record.
    ///
    /// `version_id` in the configuration is ignored here; rollback is an
    /// update-only instruction.
    pub async fn create(
        &self,
        config: &PromptResourceModel,
    ) -> Result<PromptResourceModel, ProviderError> {
        if config.name.trim().is_empty() {
            return Err(ProviderError::InvalidConfiguration(
                "'name' must not be empty".to_string(),
            ));
        }
        if config.content.is_empty() {
            return Err(ProviderError::InvalidConfiguration(
                "'content' must not be empty".to_string(),
            ));
        }

        let req = CreatePromptRequest {
            name: config.name.clone(),
            content: config.content.clone(),
            description: config.description.clone(),
            tags: (!config.tags.is_empty()).then(|| config.tags.clone()),
            visibility: config.visibility,
        };

        let prompt = self.api.create_prompt(req).await?;
        debug!(prompt_id = %prompt.id, name = %prompt.name, "Created prompt");

        let mut state = config.refresh_from(prompt);
        state.version_id = None;
        Ok(state)
    }

    /// Refresh state from the service.
    pub async fn read(&self, state: &PromptResourceModel) -> Result<ReadOutcome, ProviderError> {
        let id = state.require_id("read")?;

        let Some(prompt) = self.api.get_prompt(id).await? else {
            debug!(prompt_id = %id, "Prompt no longer exists on the service");
            return Ok(ReadOutcome::Removed);
        };

        Ok(ReadOutcome::Current(state.refresh_from(prompt)))
    }

    /// Apply an update plan.
    ///
    /// A set `version_id` requests a rollback and wins over any field
    /// changes carried in the same plan; the prompt is re-read afterwards
    /// so the returned state reflects the reverted content rather than
    /// the stale plan values.
    pub async fn update(
        &self,
        plan: &PromptResourceModel,
    ) -> Result<PromptResourceModel, ProviderError> {
        let id = plan.require_id("update")?;

        match UpdateAction::from_plan(plan) {
            UpdateAction::Rollback(version_id) => {
                self.api.rollback_prompt(id, version_id).await?;
                debug!(prompt_id = %id, version_id = %version_id, "Rolled back prompt");

                let prompt = self
                    .api
                    .get_prompt(id)
                    .await?
                    .ok_or_else(|| ProviderError::not_found_by_id(id))?;
                Ok(plan.refresh_from(prompt))
            }
            UpdateAction::Fields(req) => {
                self.api.update_prompt(id, req).await?;
                debug!(prompt_id = %id, "Updated prompt");
                Ok(plan.clone())
            }
        }
    }

    /// Delete the remote prompt. Deleting a prompt that is already gone
    /// succeeds.
    pub async fn delete(&self, state: &PromptResourceModel) -> Result<(), ProviderError> {
        let id = state.require_id("delete")?;
        self.api.delete_prompt(id).await?;
        debug!(prompt_id = %id, "Deleted prompt");
        Ok(())
    }
}
