//! The orb engine: four randomized reforging operations over a loadout's
//! active enchantments.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
