//! PromptVersion - Immutable Prompt Snapshot
//!
//! Versions are produced by the service as a side effect of prompt
//! mutation. They are read-only from this side: never created or
//! deleted directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded version of a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptVersion {
    pub id: Uuid,
    /// Monotonic number assigned by the service.
    pub version: i64,
    pub created_at: DateTime<Utc>,
}
