//! Prompt versions data source
//!
//! Read-only lookup of every recorded version of one prompt.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use promptdeck::domain::{PromptVersion, ProviderError};
use promptdeck::ports::PromptApi;

use crate::schema::{Attribute, AttributeType, Schema};

/// One version entry in the computed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptVersionModel {
    pub id: Uuid,
    pub version_number: i64,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<PromptVersion> for PromptVersionModel {
    fn from(version: PromptVersion) -> Self {
        Self {
            id: version.id,
            version_number: version.version,
            created_at: version.created_at.to_rfc3339(),
        }
    }
}

/// Computed output of a versions lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptVersionsModel {
    pub prompt_id: Uuid,
    pub versions: Vec<PromptVersionModel>,
}

/// Read-only version list lookup
pub struct PromptVersionsDataSource {
    api: Arc<dyn PromptApi>,
}

impl PromptVersionsDataSource {
    /// Configure the data source with a service client handle
    pub fn new(api: Arc<dyn PromptApi>) -> Self {
        Self { api }
    }

    /// Attribute schema for a `prompt_versions` data block
    pub fn schema() -> Schema {
        Schema {
            description: "Lists versions of a specific prompt.",
            attributes: vec![
                Attribute::required("prompt_id", AttributeType::String, "The ID of the prompt"),
                Attribute::computed(
                    "versions",
                    AttributeType::ObjectList,
                    "List of prompt versions",
                )
                .with_nested(vec![
                    Attribute::computed("id", AttributeType::String, "Version identifier"),
                    Attribute::computed(
                        "version_number",
                        AttributeType::Int64,
                        "Version number",
                    ),
                    Attribute::computed(
                        "created_at",
                        AttributeType::String,
                        "Creation timestamp",
                    ),
                ]),
            ],
        }
    }

    /// Fetch the version list for a prompt.
    ///
    /// The order is passed through exactly as the service returned it;
    /// it is not guaranteed to be chronological.
    pub async fn read(&self, prompt_id: Uuid) -> Result<PromptVersionsModel, ProviderError> {
        debug!(prompt_id = %prompt_id, "Looking up prompt versions");

        let versions = self.api.get_prompt_versions(prompt_id).await?;
        Ok(PromptVersionsModel {
            prompt_id,
            versions: versions.into_iter().map(Into::into).collect(),
        })
    }
}
