//! PromptLab Data Models
//!
//! Request/response DTOs for the HTTP API.
//! - Prompt: Text templates with metadata
//! - Collection: Named groupings of prompts

mod collection;
mod prompt;

pub use collection::*;
pub use prompt::*;
