//! Seed codec: one-line shareable encoding of a full loadout.

pub mod codec;

pub use codec::*;
