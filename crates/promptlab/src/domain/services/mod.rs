//! Domain Services
//!
//! Pure, side-effect-free functions over entity snapshots.

mod query;
mod template;

pub use query::*;
pub use template::*;
