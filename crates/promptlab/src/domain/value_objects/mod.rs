//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod field_update;
mod prompt_query;
pub mod timestamp;

pub use field_update::*;
pub use prompt_query::*;
