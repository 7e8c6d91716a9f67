//! Collection Application Service (Use Case)
//!
//! Orchestrates domain operations for Collection management,
//! including the cascade from a collection to its prompts.

use std::sync::Arc;

use promptlab::{
    Collection, CollectionDraft, CollectionRepository, DomainError, Prompt, PromptRepository,
};

use super::WriteGate;

/// Application service for Collection operations
pub struct CollectionService<P: PromptRepository, C: CollectionRepository> {
    prompts: Arc<P>,
    collections: Arc<C>,
    writes: WriteGate,
}

impl<P: PromptRepository, C: CollectionRepository> CollectionService<P, C> {
    pub fn new(prompts: Arc<P>, collections: Arc<C>, writes: WriteGate) -> Self {
        Self {
            prompts,
            collections,
            writes,
        }
    }

    /// Get all Collections
    pub async fn list_all(&self) -> Result<Vec<Collection>, DomainError> {
        self.collections.find_all().await
    }

    /// Get a Collection by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Collection>, DomainError> {
        self.collections.find_by_id(id).await
    }

    /// Create a new Collection
    pub async fn create(&self, draft: CollectionDraft) -> Result<Collection, DomainError> {
        let collection = Collection::new(draft)?;

        let _guard = self.writes.lock().await;
        let saved = self.collections.create(&collection).await?;

        tracing::info!("Created Collection: {} ({})", saved.name(), saved.id());

        Ok(saved)
    }

    /// Delete a Collection and every Prompt referencing it.
    ///
    /// Returns the number of prompts removed with it. Either all of them and
    /// the collection are gone afterwards, or nothing changed.
    pub async fn delete(&self, id: &str) -> Result<usize, DomainError> {
        let _guard = self.writes.lock().await;

        if !self.collections.exists(id).await? {
            return Err(DomainError::not_found("Collection", id));
        }

        let members = self.prompts.find_by_collection(id).await?;
        let mut removed: Vec<Prompt> = Vec::with_capacity(members.len());

        for prompt in members {
            match self.prompts.delete(prompt.id()).await {
                Ok(_) => removed.push(prompt),
                Err(e) => {
                    self.restore(id, &removed).await;
                    return Err(e);
                }
            }
        }

        match self.collections.delete(id).await {
            Ok(true) => {}
            Ok(false) => {
                self.restore(id, &removed).await;
                return Err(DomainError::not_found("Collection", id));
            }
            Err(e) => {
                self.restore(id, &removed).await;
                return Err(e);
            }
        }

        tracing::info!(
            "Deleted Collection: {} with {} prompt(s)",
            id,
            removed.len()
        );

        Ok(removed.len())
    }

    /// Put back prompts removed by an aborted cascade.
    ///
    /// Relies on the repository returning a re-created id to its old position.
    async fn restore(&self, collection_id: &str, removed: &[Prompt]) {
        tracing::warn!(
            "Rolling back cascade for Collection {}: restoring {} prompt(s)",
            collection_id,
            removed.len()
        );

        for prompt in removed {
            if let Err(e) = self.prompts.create(prompt).await {
                tracing::error!("Failed to restore Prompt {}: {}", prompt.id(), e);
            }
        }
    }
}
