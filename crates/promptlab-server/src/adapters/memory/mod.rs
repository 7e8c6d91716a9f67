//! In-Memory Repository Implementations

mod store;

pub use store::InMemoryStore;
