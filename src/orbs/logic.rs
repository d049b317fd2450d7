use log::debug;
use rand::Rng;

use super::types::{Draw, Orb, OrbOutcome};
use crate::catalog::{CatalogIndex, Slot};
use crate::session::{ActiveLoadout, MAX_ACTIVE_ENCHANTMENTS};

/// Apply one orb to the loadout. With an item selected the orb's usage
/// counter goes up by exactly one, whether or not the enchantment list
/// changes; with no item selected nothing happens at all.
pub fn apply_orb<R: Rng>(
    loadout: &mut ActiveLoadout,
    orb: Orb,
    catalog: &CatalogIndex,
    rng: &mut R,
) -> OrbOutcome {
    let slot = match loadout.slot() {
        Some(slot) => slot,
        None => return OrbOutcome::noop(orb, "No item selected."),
    };

    loadout.orb_counts.bump(orb);
    let before = loadout.active.clone();

    let mut outcome = match orb {
        Orb::Annul => annul(loadout, slot, catalog, rng),
        Orb::Annex => annex(loadout, slot, catalog, rng),
        Orb::Turmoil => turmoil(loadout, slot, catalog, rng),
        Orb::Falter => falter(loadout, slot, catalog, rng),
    };
    outcome.changed = before != loadout.active;

    loadout.debug_check_invariants();
    debug!(
        "{} on {:?} slot: changed={} ({})",
        orb.name(),
        slot,
        outcome.changed,
        outcome.rationale
    );
    outcome
}

/// Remove one enchantment. Families with a strictly higher tier still
/// available for the slot are removed first; only when every active family
/// is already maxed does the draw fall back to the whole list.
fn annul<R: Rng>(
    loadout: &mut ActiveLoadout,
    slot: Slot,
    catalog: &CatalogIndex,
    rng: &mut R,
) -> OrbOutcome {
    if loadout.active.is_empty() {
        return OrbOutcome::noop(Orb::Annul, "No enchantments to remove.");
    }

    let upgradable: Vec<usize> = loadout
        .active
        .iter()
        .enumerate()
        .filter(|(_, e)| catalog.has_higher_tier(&e.base_name, slot, e.tier))
        .map(|(i, _)| i)
        .collect();

    let (pool, pool_label): (Vec<usize>, &str) = if upgradable.is_empty() {
        ((0..loadout.active.len()).collect(), "active")
    } else {
        (upgradable, "upgradable")
    };

    let draw = rng.gen_range(0..pool.len());
    let removed = loadout.active.remove(pool[draw]);

    OrbOutcome {
        orb: Orb::Annul,
        changed: true,
        draws: vec![Draw { pool: pool.len(), index: draw }],
        rationale: format!(
            "Removed {} (1 in {} among {} enchantments).",
            removed.label(),
            pool.len(),
            pool_label
        ),
    }
}

/// Add one enchantment from a family valid for the slot and not already
/// active: uniform family draw, then uniform tier draw within it.
fn annex<R: Rng>(
    loadout: &mut ActiveLoadout,
    slot: Slot,
    catalog: &CatalogIndex,
    rng: &mut R,
) -> OrbOutcome {
    if loadout.active.len() >= MAX_ACTIVE_ENCHANTMENTS {
        return OrbOutcome::noop(Orb::Annex, "Already holds three enchantments.");
    }

    let current: Vec<String> = loadout.base_names().iter().map(|s| s.to_string()).collect();
    let candidates: Vec<&str> = catalog
        .families_for_slot(slot)
        .into_iter()
        .filter(|base| !current.iter().any(|c| c == base))
        .collect();
    if candidates.is_empty() {
        return OrbOutcome::noop(Orb::Annex, "No eligible enchantment families for this slot.");
    }

    let family_draw = rng.gen_range(0..candidates.len());
    let base = candidates[family_draw];
    let tiers = catalog.tiers_of(base, slot);
    let tier_draw = rng.gen_range(0..tiers.len());
    let added = tiers[tier_draw].clone();
    let rationale = format!(
        "Added {} (family 1 in {}, tier 1 in {}).",
        added.label(),
        candidates.len(),
        tiers.len()
    );
    loadout.active.push(added);

    OrbOutcome {
        orb: Orb::Annex,
        changed: true,
        draws: vec![
            Draw { pool: candidates.len(), index: family_draw },
            Draw { pool: tiers.len(), index: tier_draw },
        ],
        rationale,
    }
}

/// Discard everything and reroll up to three fresh families, sampling
/// families without replacement; one uniform tier draw per family.
fn turmoil<R: Rng>(
    loadout: &mut ActiveLoadout,
    slot: Slot,
    catalog: &CatalogIndex,
    rng: &mut R,
) -> OrbOutcome {
    loadout.active.clear();
    let mut pool: Vec<&str> = catalog.families_for_slot(slot);
    let eligible = pool.len();
    if eligible == 0 {
        return OrbOutcome::noop(Orb::Turmoil, "No eligible enchantment families for this slot.");
    }

    let mut draws = Vec::new();
    for _ in 0..MAX_ACTIVE_ENCHANTMENTS {
        if pool.is_empty() {
            break;
        }
        let family_draw = rng.gen_range(0..pool.len());
        draws.push(Draw { pool: pool.len(), index: family_draw });
        let base = pool.remove(family_draw);
        let tiers = catalog.tiers_of(base, slot);
        let tier_draw = rng.gen_range(0..tiers.len());
        draws.push(Draw { pool: tiers.len(), index: tier_draw });
        loadout.active.push(tiers[tier_draw].clone());
    }

    let labels = loadout.active_labels().join(", ");
    OrbOutcome {
        orb: Orb::Turmoil,
        changed: true,
        draws,
        rationale: format!(
            "Rerolled into {} of {} eligible families: {}.",
            loadout.active.len(),
            eligible,
            labels
        ),
    }
}

/// Redraw a tier for every active enchantment from its own family, the
/// same tier included. The set of families never changes here.
fn falter<R: Rng>(
    loadout: &mut ActiveLoadout,
    slot: Slot,
    catalog: &CatalogIndex,
    rng: &mut R,
) -> OrbOutcome {
    if loadout.active.is_empty() {
        return OrbOutcome::noop(Orb::Falter, "No enchantments to reroll.");
    }

    let mut draws = Vec::new();
    let mut rerolls = Vec::new();
    for i in 0..loadout.active.len() {
        let old_label = loadout.active[i].label();
        let base = loadout.active[i].base_name.clone();
        let tiers = catalog.tiers_of(&base, slot);
        if tiers.is_empty() {
            continue;
        }
        let tier_draw = rng.gen_range(0..tiers.len());
        draws.push(Draw { pool: tiers.len(), index: tier_draw });
        loadout.active[i] = tiers[tier_draw].clone();
        rerolls.push(format!("{} -> {}", old_label, loadout.active[i].label()));
    }

    OrbOutcome {
        orb: Orb::Falter,
        changed: true,
        draws,
        rationale: format!("Rerolled tiers: {}.", rerolls.join(", ")),
    }
}
