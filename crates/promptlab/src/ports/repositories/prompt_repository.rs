//! Prompt Repository Port
//!
//! Abstract interface for Prompt storage operations.
//! Absence is reported as `None`/`false`, never as an error.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Prompt};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Insert a prompt under its id (an existing record with the same id is overwritten).
    ///
    /// Re-inserting a previously deleted id puts it back at its old listing position.
    async fn create(&self, prompt: &Prompt) -> Result<Prompt, DomainError>;

    /// Find a prompt by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError>;

    /// Find all prompts
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Replace an existing prompt; `None` if no record has this id
    async fn update(&self, prompt: &Prompt) -> Result<Option<Prompt>, DomainError>;

    /// Delete a prompt by ID
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    /// Find all prompts referencing a collection
    async fn find_by_collection(&self, collection_id: &str) -> Result<Vec<Prompt>, DomainError>;
}
