//! Infrastructure Adapters
//!
//! Implementations of domain ports for storage backends.

pub mod memory;

// Re-exports
pub use memory::InMemoryStore;
