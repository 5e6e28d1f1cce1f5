//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! the remote prompt service. The HTTP implementation lives in
//! `promptdeck-provider`.

pub mod prompt_api;

// Re-exports
pub use prompt_api::*;
