//! Prompt - Text Template with Metadata
//!
//! Pure domain entity without infrastructure dependencies.
//! A `Prompt` can only be built from a validated `PromptDraft`, so every
//! instance that exists satisfies the field constraints.

use chrono::{DateTime, Utc};
use validator::Validate;

use super::identity::{generate_id, now};
use crate::domain::errors::DomainError;
use crate::domain::services::extract_variables;
use crate::domain::value_objects::FieldUpdate;

/// Prompt - A stored prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    id: String,
    title: String,
    content: String,
    description: Option<String>,
    collection_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unvalidated field bundle a prompt is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PromptDraft {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

impl PromptDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            description: None,
            collection_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_collection(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    /// Validate the draft and normalize an empty collection id to none
    pub fn checked(mut self) -> Result<Self, DomainError> {
        self.validate()?;
        self.collection_id = self.collection_id.filter(|id| !id.is_empty());
        Ok(self)
    }
}

/// Partial update of a prompt; omitted fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptPatch {
    pub title: FieldUpdate<String>,
    pub content: FieldUpdate<String>,
    pub description: FieldUpdate<String>,
    pub collection_id: FieldUpdate<String>,
}

impl Prompt {
    /// Create a new prompt with generated ID and timestamps
    pub fn new(draft: PromptDraft) -> Result<Self, DomainError> {
        let draft = draft.checked()?;
        let now = now();
        Ok(Self {
            id: generate_id(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: draft.collection_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every field from the draft, keeping identity and creation time
    pub fn replace(&self, draft: PromptDraft) -> Result<Self, DomainError> {
        let draft = draft.checked()?;
        Ok(Self {
            id: self.id.clone(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: draft.collection_id,
            created_at: self.created_at,
            updated_at: self.next_updated_at(),
        })
    }

    /// Merge a partial update into a new snapshot.
    ///
    /// `updated_at` is refreshed even when no field actually changes.
    pub fn apply_patch(&self, patch: PromptPatch) -> Result<Self, DomainError> {
        let draft = PromptDraft {
            title: patch.title.resolve(self.title.clone()),
            content: patch.content.resolve(self.content.clone()),
            description: patch.description.resolve_option(self.description.clone()),
            collection_id: patch
                .collection_id
                .resolve_option(self.collection_id.clone()),
        };
        self.replace(draft)
    }

    // Clock may step backwards; updated_at must not.
    fn next_updated_at(&self) -> DateTime<Utc> {
        now().max(self.updated_at)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn collection_id(&self) -> Option<&str> {
        self.collection_id.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Template variables referenced by the content
    pub fn variables(&self) -> Vec<String> {
        extract_variables(&self.content)
    }

    #[cfg(test)]
    pub(crate) fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }
}
