//! In-memory implementation of PromptRepository and CollectionRepository
//!
//! Both entity sets live behind one lock. Reads hand out clones, so callers
//! never observe a record while it is being replaced. Listings come back in
//! insertion order; overwriting an id keeps its original position, and so
//! does re-inserting an id that was deleted earlier.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use promptlab::{Collection, CollectionRepository, DomainError, Prompt, PromptRepository};

struct Slot<T> {
    seq: u64,
    value: T,
}

struct Table<T> {
    slots: HashMap<String, Slot<T>>,
    /// Sequence numbers of deleted ids
    retired: HashMap<String, u64>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            retired: HashMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Insert or overwrite. A known id keeps its sequence number; `fresh`
    /// is only used for ids never seen before.
    fn upsert(&mut self, id: &str, value: T, fresh: u64) {
        let seq = match self.slots.get(id) {
            Some(slot) => slot.seq,
            None => self.retired.remove(id).unwrap_or(fresh),
        };
        self.slots.insert(id.to_string(), Slot { seq, value });
    }

    fn get(&self, id: &str) -> Option<T> {
        self.slots.get(id).map(|slot| slot.value.clone())
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.slots.remove(id) {
            Some(slot) => {
                self.retired.insert(id.to_string(), slot.seq);
                true
            }
            None => false,
        }
    }

    fn ordered(&self) -> Vec<T> {
        let mut slots: Vec<&Slot<T>> = self.slots.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| slot.value.clone()).collect()
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.retired.clear();
    }
}

#[derive(Default)]
struct Tables {
    next_seq: u64,
    prompts: Table<Prompt>,
    collections: Table<Collection>,
}

impl Tables {
    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// Process-local store for prompts and collections
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both entity sets
    #[allow(dead_code)]
    pub async fn clear(&self) {
        let mut tables = self.tables.write().await;
        tables.prompts.clear();
        tables.collections.clear();
    }
}

#[async_trait]
impl PromptRepository for InMemoryStore {
    async fn create(&self, prompt: &Prompt) -> Result<Prompt, DomainError> {
        let mut tables = self.tables.write().await;
        let seq = tables.next_seq();
        tables.prompts.upsert(prompt.id(), prompt.clone(), seq);
        Ok(prompt.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.prompts.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.prompts.ordered())
    }

    async fn update(&self, prompt: &Prompt) -> Result<Option<Prompt>, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.prompts.slots.get_mut(prompt.id()) {
            Some(slot) => {
                slot.value = prompt.clone();
                Ok(Some(prompt.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables.prompts.remove(id))
    }

    async fn find_by_collection(&self, collection_id: &str) -> Result<Vec<Prompt>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .prompts
            .ordered()
            .into_iter()
            .filter(|p| p.collection_id() == Some(collection_id))
            .collect())
    }
}

#[async_trait]
impl CollectionRepository for InMemoryStore {
    async fn create(&self, collection: &Collection) -> Result<Collection, DomainError> {
        let mut tables = self.tables.write().await;
        let seq = tables.next_seq();
        tables
            .collections
            .upsert(collection.id(), collection.clone(), seq);
        Ok(collection.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Collection>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.collections.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Collection>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.collections.ordered())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables.collections.remove(id))
    }
}
