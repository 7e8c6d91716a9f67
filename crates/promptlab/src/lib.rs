//! PromptLab Domain Library
//!
//! Core domain types and interfaces for managing prompt templates
//! grouped into collections.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, Collection)
//!   - `value_objects/`: Immutable value types (FieldUpdate, PromptQuery, timestamp format)
//!   - `services/`: Pure functions (query pipeline, template helpers)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::domain::{Prompt, PromptDraft, PromptQuery};
//! use promptlab::ports::PromptRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    apply_query, extract_variables, filter_by_collection, generate_id, now, search, sort_by_date,
    validate_content, Collection, CollectionDraft, DomainError, FieldUpdate, Prompt, PromptDraft,
    PromptPatch, PromptQuery,
};
pub use domain::value_objects::timestamp;
pub use ports::{CollectionRepository, PromptRepository};
