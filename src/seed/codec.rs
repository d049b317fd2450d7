//! Loadout <-> seed string conversion.
//!
//! Format: `<itemName>|<slotKey>|<orbId>:<count>,...|<effectCode>:<tier>,...`
//! Encoding is deterministic. Decoding is best-effort and never fails hard:
//! fragments that do not resolve are dropped and the rest of the seed still
//! applies; a seed whose item cannot be resolved yields `None` so the
//! caller leaves its state untouched.

use log::debug;

use crate::catalog::{CatalogIndex, EffectType};
use crate::orbs::Orb;
use crate::session::{ActiveLoadout, MAX_ACTIVE_ENCHANTMENTS};

/// Canonical seed string for the loadout, or `None` with no item selected.
pub fn encode(loadout: &ActiveLoadout) -> Option<String> {
    let item = loadout.item.as_ref()?;
    let counts = Orb::ALL
        .iter()
        .map(|orb| format!("{}:{}", orb.id(), loadout.orb_counts.get(*orb)))
        .collect::<Vec<_>>()
        .join(",");
    let enchants = loadout
        .active
        .iter()
        .map(|e| format!("{}:{}", e.effect.code(), e.tier))
        .collect::<Vec<_>>()
        .join(",");
    Some(format!("{}|{}|{}|{}", item.name, item.slot.key(), counts, enchants))
}

/// Reconstruct a loadout from a seed string. Returns `None` when the item
/// fragment matches nothing in the catalog.
pub fn decode(seed: &str, catalog: &CatalogIndex) -> Option<ActiveLoadout> {
    let mut fields = seed.split('|');
    let item_fragment = fields.next()?;
    let item = match catalog.item_by_name_fragment(item_fragment) {
        Some(item) => item.clone(),
        None => {
            debug!("seed item {:?} matched nothing", item_fragment);
            return None;
        }
    };
    // The slot field is informational; the resolved item's slot is
    // authoritative.
    let _slot_field = fields.next();
    let counts_field = fields.next().unwrap_or("");
    let enchants_field = fields.next().unwrap_or("");

    let slot = item.slot;
    let mut loadout = ActiveLoadout {
        item: Some(item),
        ..ActiveLoadout::new()
    };

    for pair in counts_field.split(',').filter(|p| !p.is_empty()) {
        match parse_count_pair(pair) {
            Some((orb, count)) => loadout.orb_counts.set(orb, count),
            None => debug!("dropping malformed orb count {:?}", pair),
        }
    }

    for pair in enchants_field.split(',').filter(|p| !p.is_empty()) {
        if loadout.active.len() >= MAX_ACTIVE_ENCHANTMENTS {
            debug!("dropping enchantment {:?}: already at capacity", pair);
            continue;
        }
        let resolved = parse_enchant_pair(pair)
            .and_then(|(effect, tier)| catalog.find_enchantment(effect, tier, slot));
        match resolved {
            Some(ench) => {
                if loadout.base_names().contains(&ench.base_name.as_str()) {
                    debug!("dropping enchantment {:?}: family already active", pair);
                } else {
                    loadout.active.push(ench.clone());
                }
            }
            None => debug!("dropping unresolvable enchantment {:?}", pair),
        }
    }

    loadout.debug_check_invariants();
    Some(loadout)
}

fn parse_count_pair(pair: &str) -> Option<(Orb, u32)> {
    let (id, count) = pair.split_once(':')?;
    Some((Orb::parse(id.trim())?, count.trim().parse().ok()?))
}

fn parse_enchant_pair(pair: &str) -> Option<(EffectType, u8)> {
    let (code, tier) = pair.split_once(':')?;
    Some((EffectType::from_code(code.trim())?, tier.trim().parse().ok()?))
}
