//! Combat calculator: aggregate stats and the DPS panel for weapon builds.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
