//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: Text template with metadata
//! - Collection: Named grouping of prompts

mod collection;
mod identity;
mod prompt;

pub use collection::*;
pub use identity::*;
pub use prompt::*;
