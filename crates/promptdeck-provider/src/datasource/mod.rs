//! Read-Only Data Sources
//!
//! Lookups against the service with no side effects:
//! - `prompt`: one prompt by id or by name
//! - `prompt_versions`: all versions of one prompt

mod prompt;
mod prompt_versions;

pub use prompt::*;
pub use prompt_versions::*;
