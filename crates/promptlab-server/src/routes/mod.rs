//! PromptLab API Routes
//!
//! - /prompts - Prompt management, listing with filter and search
//! - /prompts/:id/variables - Template variables of a prompt
//! - /collections - Collection management (delete cascades to prompts)

pub mod collection;
pub mod prompt;
pub mod swagger;
