//! Session state: the active loadout and the user-intent surface the UI
//! shell drives.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
