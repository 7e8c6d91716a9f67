//! Collection Repository Port
//!
//! Abstract interface for Collection storage operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Collection};

/// Repository interface for Collection entities
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Insert a collection under its id
    async fn create(&self, collection: &Collection) -> Result<Collection, DomainError>;

    /// Find a collection by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Collection>, DomainError>;

    /// Find all collections
    async fn find_all(&self) -> Result<Vec<Collection>, DomainError>;

    /// Delete a collection by ID (referencing prompts are left alone)
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    /// Check if a collection exists
    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
