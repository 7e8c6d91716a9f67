//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the query pipeline.

mod collection_service;
mod prompt_service;

pub use collection_service::CollectionService;
pub use prompt_service::{PromptService, TemplateReport};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Serializes mutating use cases so check-then-write sequences
/// (reference checks, cascades) cannot interleave.
pub type WriteGate = Arc<Mutex<()>>;

pub fn write_gate() -> WriteGate {
    Arc::new(Mutex::new(()))
}
