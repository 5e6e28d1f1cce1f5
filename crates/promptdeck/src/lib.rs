//! Promptdeck Domain Library
//!
//! Core domain types and interfaces for managing prompts on a remote
//! prompt service through declarative configuration.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, PromptVersion)
//!   - `value_objects/`: Immutable value types (Visibility)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `prompt_api`: The remote prompt service surface
//!
//! Implementations of the ports live in `promptdeck-provider`.

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Prompt, PromptVersion, ProviderError, Visibility};
pub use ports::{CreatePromptRequest, PromptApi, UpdatePromptRequest};
