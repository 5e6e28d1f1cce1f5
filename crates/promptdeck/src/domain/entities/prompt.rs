//! Prompt - Managed Prompt Entity
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Visibility;

/// A prompt record as held by the remote service.
///
/// The service owns this entity end to end: it assigns the id at creation,
/// bumps `updated_at` on every mutation, and records an immutable version
/// snapshot as a side effect. Local callers only ever hold copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let prompt: Prompt = serde_json::from_value(serde_json::json!({
            "id": "4b4002b2-6f39-4b5e-8f6e-9a2c5d1e0a11",
            "name": "greeting",
            "content": "Hello!",
            "created_at": "2025-01-15T09:30:00Z",
            "updated_at": "2025-01-15T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(prompt.name, "greeting");
        assert!(prompt.description.is_none());
        assert!(prompt.tags.is_empty());
        assert_eq!(prompt.visibility, Visibility::Private);
    }

    #[test]
    fn test_deserialize_full_record() {
        let prompt: Prompt = serde_json::from_value(serde_json::json!({
            "id": "4b4002b2-6f39-4b5e-8f6e-9a2c5d1e0a11",
            "name": "summarizer",
            "description": "Summarizes long documents",
            "content": "Summarize the following text.",
            "tags": ["nlp", "summarization"],
            "visibility": "public",
            "created_at": "2025-01-15T09:30:00Z",
            "updated_at": "2025-02-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(prompt.description.as_deref(), Some("Summarizes long documents"));
        assert_eq!(prompt.tags, vec!["nlp", "summarization"]);
        assert_eq!(prompt.visibility, Visibility::Public);
    }
}
