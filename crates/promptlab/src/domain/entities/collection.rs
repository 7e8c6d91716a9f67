//! Collection - Named Grouping of Prompts
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use validator::Validate;

use super::identity::{generate_id, now};
use crate::domain::errors::DomainError;

/// Collection - A named group of prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    id: String,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// Unvalidated field bundle a collection is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CollectionDraft {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

impl CollectionDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Collection {
    /// Create a new collection with generated ID and timestamp
    pub fn new(draft: CollectionDraft) -> Result<Self, DomainError> {
        draft.validate()?;
        Ok(Self {
            id: generate_id(),
            name: draft.name,
            description: draft.description,
            created_at: now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
