//! Repository Ports
//!
//! Abstract interfaces for entity storage operations.

mod collection_repository;
mod prompt_repository;

pub use collection_repository::*;
pub use prompt_repository::*;
