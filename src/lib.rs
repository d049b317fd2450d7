//! Reforge - Equipment Enchantment Simulator Core
//!
//! Library core for an equipment/enchantment simulator: pick an item, apply
//! randomized reforging orbs to its enchantments, read off the resulting
//! combat stats, and share the build as a compact seed string. The UI shell
//! that renders items and logs orb outcomes lives outside this crate; it
//! feeds the two catalog data sets in and displays what comes out.

pub mod catalog;
pub mod combat;
pub mod orbs;
pub mod seed;
pub mod session;
