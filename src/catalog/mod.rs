//! Item and enchantment catalog: types, loading, and the read-only index
//! the rest of the crate queries.

pub mod index;
pub mod loader;
pub mod types;

pub use index::*;
pub use loader::*;
pub use types::*;
