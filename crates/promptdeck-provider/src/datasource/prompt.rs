//! Prompt data source
//!
//! Read-only lookup of a single prompt by id or by name.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use promptdeck::domain::{Prompt, ProviderError, Visibility};
use promptdeck::ports::PromptApi;

use crate::schema::{Attribute, AttributeType, Schema};

/// How a lookup resolves its target, decided once at the configuration
/// boundary. Exactly one of id/name must be configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptLookup {
    ById(Uuid),
    ByName(String),
}

impl PromptLookup {
    /// Resolve the configured inputs into a lookup.
    pub fn resolve(id: Option<Uuid>, name: Option<String>) -> Result<Self, ProviderError> {
        match (id, name) {
            (Some(id), None) => Ok(PromptLookup::ById(id)),
            (None, Some(name)) => Ok(PromptLookup::ByName(name)),
            (Some(_), Some(_)) => Err(ProviderError::InvalidConfiguration(
                "Only one of 'id' and 'name' may be provided".to_string(),
            )),
            (None, None) => Err(ProviderError::InvalidConfiguration(
                "Either 'id' or 'name' must be provided".to_string(),
            )),
        }
    }
}

/// Computed output of a prompt lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDataSourceModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub visibility: Visibility,
}

impl From<Prompt> for PromptDataSourceModel {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            name: prompt.name,
            description: prompt.description,
            content: prompt.content,
            tags: prompt.tags,
            visibility: prompt.visibility,
        }
    }
}

/// Read-only prompt lookup
pub struct PromptDataSource {
    api: Arc<dyn PromptApi>,
}

impl PromptDataSource {
    /// Configure the data source with a service client handle
    pub fn new(api: Arc<dyn PromptApi>) -> Self {
        Self { api }
    }

    /// Attribute schema for a `prompt` data block
    pub fn schema() -> Schema {
        Schema {
            description: "Fetches an existing prompt by id or name.",
            attributes: vec![
                Attribute::optional_computed("id", AttributeType::String, "Prompt identifier"),
                Attribute::optional("name", AttributeType::String, "The name of the prompt"),
                Attribute::computed(
                    "description",
                    AttributeType::String,
                    "Description of the prompt",
                ),
                Attribute::computed(
                    "content",
                    AttributeType::String,
                    "The content of the prompt",
                ),
                Attribute::computed(
                    "tags",
                    AttributeType::StringList,
                    "List of tags for the prompt",
                ),
                Attribute::computed(
                    "visibility",
                    AttributeType::String,
                    "Visibility of the prompt",
                ),
            ],
        }
    }

    /// Look up one prompt.
    ///
    /// By-name lookup scans the unfiltered list and the first exact match
    /// wins; duplicate names are not disambiguated. A missing prompt is
    /// `NotFound` — a data block that names a nonexistent entity is an
    /// error, unlike a managed resource refresh.
    pub async fn read(
        &self,
        lookup: PromptLookup,
    ) -> Result<PromptDataSourceModel, ProviderError> {
        match lookup {
            PromptLookup::ById(id) => {
                debug!(prompt_id = %id, "Looking up prompt by id");
                self.api
                    .get_prompt(id)
                    .await?
                    .map(Into::into)
                    .ok_or_else(|| ProviderError::not_found_by_id(id))
            }
            PromptLookup::ByName(name) => {
                debug!(name = %name, "Looking up prompt by name");
                let prompts = self.api.list_prompts().await?;
                prompts
                    .into_iter()
                    .find(|p| p.name == name)
                    .map(Into::into)
                    .ok_or_else(|| ProviderError::not_found_by_name(&name))
            }
        }
    }
}
