//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for Prompt management.

use std::sync::Arc;

use promptlab::{
    apply_query, validate_content, CollectionRepository, DomainError, Prompt, PromptDraft,
    PromptPatch, PromptQuery, PromptRepository,
};

use super::WriteGate;

/// Variables and advisory content check for one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReport {
    pub prompt_id: String,
    pub variables: Vec<String>,
    pub content_valid: bool,
}

/// Application service for Prompt operations
pub struct PromptService<P: PromptRepository, C: CollectionRepository> {
    prompts: Arc<P>,
    collections: Arc<C>,
    writes: WriteGate,
}

impl<P: PromptRepository, C: CollectionRepository> PromptService<P, C> {
    pub fn new(prompts: Arc<P>, collections: Arc<C>, writes: WriteGate) -> Self {
        Self {
            prompts,
            collections,
            writes,
        }
    }

    /// List prompts: filter by collection, search, newest first
    pub async fn list(&self, query: &PromptQuery) -> Result<Vec<Prompt>, DomainError> {
        let prompts = self.prompts.find_all().await?;
        Ok(apply_query(prompts, query))
    }

    /// Get a Prompt by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        self.prompts.find_by_id(id).await
    }

    /// Create a new Prompt
    pub async fn create(&self, draft: PromptDraft) -> Result<Prompt, DomainError> {
        let prompt = Prompt::new(draft)?;

        let _guard = self.writes.lock().await;
        self.ensure_collection(prompt.collection_id()).await?;
        let saved = self.prompts.create(&prompt).await?;

        tracing::info!("Created Prompt: {} ({})", saved.title(), saved.id());

        Ok(saved)
    }

    /// Replace every field of a Prompt
    pub async fn replace(&self, id: &str, draft: PromptDraft) -> Result<Prompt, DomainError> {
        let draft = draft.checked()?;

        let _guard = self.writes.lock().await;
        let current = self.require(id).await?;
        let updated = current.replace(draft)?;
        self.ensure_collection(updated.collection_id()).await?;

        let saved = self.save(updated).await?;
        tracing::info!("Replaced Prompt: {} ({})", saved.title(), saved.id());

        Ok(saved)
    }

    /// Update only the provided fields of a Prompt
    pub async fn patch(&self, id: &str, patch: PromptPatch) -> Result<Prompt, DomainError> {
        let collection_changed = patch.collection_id.is_provided();

        let _guard = self.writes.lock().await;
        let current = self.require(id).await?;
        let updated = current.apply_patch(patch)?;
        if collection_changed {
            self.ensure_collection(updated.collection_id()).await?;
        }

        let saved = self.save(updated).await?;
        tracing::info!("Patched Prompt: {} ({})", saved.title(), saved.id());

        Ok(saved)
    }

    /// Delete a Prompt
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let _guard = self.writes.lock().await;
        let deleted = self.prompts.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Prompt: {}", id);
        }
        Ok(deleted)
    }

    /// Template variables and content check for a Prompt
    pub async fn template_report(&self, id: &str) -> Result<Option<TemplateReport>, DomainError> {
        let prompt = self.prompts.find_by_id(id).await?;
        Ok(prompt.map(|p| TemplateReport {
            prompt_id: p.id().to_string(),
            variables: p.variables(),
            content_valid: validate_content(p.content()),
        }))
    }

    async fn require(&self, id: &str) -> Result<Prompt, DomainError> {
        self.prompts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    async fn save(&self, prompt: Prompt) -> Result<Prompt, DomainError> {
        self.prompts
            .update(&prompt)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", prompt.id()))
    }

    async fn ensure_collection(&self, collection_id: Option<&str>) -> Result<(), DomainError> {
        let Some(collection_id) = collection_id else {
            return Ok(());
        };

        if !self.collections.exists(collection_id).await? {
            tracing::warn!("Rejected reference to unknown Collection {}", collection_id);
            return Err(DomainError::bad_reference("Collection", collection_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::application::write_gate;
    use promptlab::{Collection, CollectionDraft, FieldUpdate};

    fn service() -> (
        PromptService<InMemoryStore, InMemoryStore>,
        Arc<InMemoryStore>,
    ) {
        let store = Arc::new(InMemoryStore::new());
        let service = PromptService::new(store.clone(), store.clone(), write_gate());
        (service, store)
    }

    async fn add_collection(store: &InMemoryStore, name: &str) -> Collection {
        let collection = Collection::new(CollectionDraft::new(name)).unwrap();
        CollectionRepository::create(store, &collection).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_with_known_collection() {
        let (service, store) = service();
        let work = add_collection(&store, "Work").await;

        let prompt = service
            .create(PromptDraft::new("Title", "Content").with_collection(work.id()))
            .await
            .unwrap();

        assert_eq!(prompt.collection_id(), Some(work.id()));
        assert!(service.get_by_id(prompt.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_with_unknown_collection_stores_nothing() {
        let (service, store) = service();

        let result = service
            .create(PromptDraft::new("Title", "Content").with_collection("missing"))
            .await;

        assert!(matches!(result, Err(DomainError::BadReference { .. })));
        assert!(PromptRepository::find_all(store.as_ref())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_stores_nothing() {
        let (service, store) = service();

        let result = service.create(PromptDraft::new("", "Content")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(PromptRepository::find_all(store.as_ref())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_replace_missing_prompt() {
        let (service, _) = service();
        let result = service
            .replace("missing", PromptDraft::new("Title", "Content"))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_replace_with_unknown_collection_keeps_original() {
        let (service, _) = service();
        let original = service
            .create(PromptDraft::new("Title", "Content"))
            .await
            .unwrap();

        let result = service
            .replace(
                original.id(),
                PromptDraft::new("Other", "Content").with_collection("missing"),
            )
            .await;

        assert!(matches!(result, Err(DomainError::BadReference { .. })));
        let stored = service.get_by_id(original.id()).await.unwrap().unwrap();
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn test_replace_drops_omitted_fields() {
        let (service, store) = service();
        let work = add_collection(&store, "Work").await;
        let original = service
            .create(
                PromptDraft::new("Title", "Content")
                    .with_description("Desc")
                    .with_collection(work.id()),
            )
            .await
            .unwrap();

        let replaced = service
            .replace(original.id(), PromptDraft::new("New", "New content"))
            .await
            .unwrap();

        assert_eq!(replaced.id(), original.id());
        assert_eq!(replaced.created_at(), original.created_at());
        assert_eq!(replaced.description(), None);
        assert_eq!(replaced.collection_id(), None);
        assert!(replaced.updated_at() >= original.updated_at());
    }

    #[tokio::test]
    async fn test_patch_single_field() {
        let (service, _) = service();
        let original = service
            .create(PromptDraft::new("Title", "Content").with_description("Desc"))
            .await
            .unwrap();

        let patched = service
            .patch(
                original.id(),
                PromptPatch {
                    content: FieldUpdate::Provided("Patched content".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.title(), "Title");
        assert_eq!(patched.content(), "Patched content");
        assert_eq!(patched.description(), Some("Desc"));
        assert!(patched.updated_at() >= original.updated_at());
    }

    #[tokio::test]
    async fn test_patch_unknown_collection() {
        let (service, _) = service();
        let original = service
            .create(PromptDraft::new("Title", "Content"))
            .await
            .unwrap();

        let result = service
            .patch(
                original.id(),
                PromptPatch {
                    collection_id: FieldUpdate::Provided("missing".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::BadReference { .. })));
    }

    #[tokio::test]
    async fn test_patch_missing_prompt() {
        let (service, _) = service();
        let result = service.patch("missing", PromptPatch::default()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, _) = service();
        let prompt = service
            .create(PromptDraft::new("Title", "Content"))
            .await
            .unwrap();

        assert!(service.delete(prompt.id()).await.unwrap());
        assert!(!service.delete(prompt.id()).await.unwrap());
        assert!(service.get_by_id(prompt.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_and_counts() {
        let (service, store) = service();
        let work = add_collection(&store, "Work").await;
        service
            .create(PromptDraft::new("Work email", "Content").with_collection(work.id()))
            .await
            .unwrap();
        service
            .create(PromptDraft::new("Personal email", "Content"))
            .await
            .unwrap();

        let all = service.list(&PromptQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let query = PromptQuery::new(Some(work.id().to_string()), None);
        let in_work = service.list(&query).await.unwrap();
        assert_eq!(in_work.len(), 1);
        assert_eq!(in_work[0].title(), "Work email");

        let query = PromptQuery::new(None, Some("PERSONAL".to_string()));
        assert_eq!(service.list(&query).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_template_report() {
        let (service, _) = service();
        let prompt = service
            .create(PromptDraft::new("Greeting", "Hello {{name}}, today is {{day}}."))
            .await
            .unwrap();

        let report = service.template_report(prompt.id()).await.unwrap().unwrap();
        assert_eq!(report.variables, vec!["name", "day"]);
        assert!(report.content_valid);

        assert!(service.template_report("missing").await.unwrap().is_none());
    }
}
