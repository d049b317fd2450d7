use log::debug;
use rand::Rng;

use super::types::ActiveLoadout;
use crate::catalog::{CatalogIndex, MonsterKind};
use crate::orbs::{self, Orb, OrbOutcome};
use crate::seed;

/// Select an item by id. Always a full reset of the enchantment state:
/// active list emptied and every orb counter back to zero. Returns false
/// (and changes nothing) for an unknown id.
pub fn select_item(loadout: &mut ActiveLoadout, catalog: &CatalogIndex, item_id: u32) -> bool {
    let item = match catalog.item_by_id(item_id) {
        Some(item) => item.clone(),
        None => {
            debug!("select_item: unknown item id {}", item_id);
            return false;
        }
    };
    loadout.item = Some(item);
    loadout.active.clear();
    loadout.orb_counts.reset();
    true
}

pub fn set_target_flag(loadout: &mut ActiveLoadout, kind: MonsterKind, enabled: bool) {
    loadout.targets.set(kind, enabled);
}

/// Apply an orb to the current loadout.
pub fn apply_orb<R: Rng>(
    loadout: &mut ActiveLoadout,
    orb: Orb,
    catalog: &CatalogIndex,
    rng: &mut R,
) -> OrbOutcome {
    orbs::apply_orb(loadout, orb, catalog, rng)
}

/// Canonical seed for the current loadout, or `None` with no item selected.
pub fn seed_string(loadout: &ActiveLoadout) -> Option<String> {
    seed::encode(loadout)
}

/// Replace the loadout with one decoded from a seed string. Target flags
/// are session-local and survive the load. A seed that resolves no item
/// leaves everything untouched and returns false.
pub fn load_seed(loadout: &mut ActiveLoadout, catalog: &CatalogIndex, seed_str: &str) -> bool {
    match seed::decode(seed_str, catalog) {
        Some(mut decoded) => {
            decoded.targets = loadout.targets;
            *loadout = decoded;
            true
        }
        None => false,
    }
}
