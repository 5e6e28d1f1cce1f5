//! Promptdeck Provider
//!
//! Maps declarative configuration blocks onto the remote prompt service:
//! one managed resource (`prompts`) and two read-only data sources
//! (`prompt` and `prompt_versions`), plus the HTTP client they share.
//!
//! Control flow per block is schema → configure → one operation per
//! plan/apply cycle. Every operation is a single request/response
//! round-trip; calls are independent and stateless beyond the shared
//! read-only client handle injected at construction time.

pub mod client;
pub mod config;
pub mod datasource;
pub mod resource;
pub mod schema;

// Re-export commonly used types
pub use client::PromptServiceClient;
pub use config::ProviderConfig;
pub use datasource::{
    PromptDataSource, PromptDataSourceModel, PromptLookup, PromptVersionModel,
    PromptVersionsDataSource, PromptVersionsModel,
};
pub use resource::{PromptResource, PromptResourceModel, ReadOutcome, UpdateAction};
pub use schema::{Attribute, AttributeType, Schema};
