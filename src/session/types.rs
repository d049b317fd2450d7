use serde::{Deserialize, Serialize};

use crate::catalog::{Enchantment, Item, MonsterKind, Slot};
use crate::orbs::OrbCounts;

/// An item never carries more than this many enchantments.
pub const MAX_ACTIVE_ENCHANTMENTS: usize = 3;

/// Which monster categories the player is currently fighting. Only the
/// conditional bane enchantments read these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFlags {
    pub undead: bool,
    pub dragon: bool,
    pub demon: bool,
}

impl TargetFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: MonsterKind) -> bool {
        match kind {
            MonsterKind::Undead => self.undead,
            MonsterKind::Dragon => self.dragon,
            MonsterKind::Demon => self.demon,
        }
    }

    pub fn set(&mut self, kind: MonsterKind, enabled: bool) {
        match kind {
            MonsterKind::Undead => self.undead = enabled,
            MonsterKind::Dragon => self.dragon = enabled,
            MonsterKind::Demon => self.demon = enabled,
        }
    }
}

/// The one mutable object in the core: selected item, its active
/// enchantments, orb usage counters, and target toggles. Owned by a single
/// session; every operation runs to completion before the next begins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveLoadout {
    pub item: Option<Item>,
    pub active: Vec<Enchantment>,
    pub orb_counts: OrbCounts,
    pub targets: TargetFlags,
}

impl ActiveLoadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self) -> Option<Slot> {
        self.item.as_ref().map(|item| item.slot)
    }

    pub fn base_names(&self) -> Vec<&str> {
        self.active.iter().map(|e| e.base_name.as_str()).collect()
    }

    /// Display labels for the active enchantments ("Aegis II", ...).
    pub fn active_labels(&self) -> Vec<String> {
        self.active.iter().map(|e| e.label()).collect()
    }

    /// Invariant check, fatal in debug builds. Any violation is a defect in
    /// the mutation that produced it, not a runtime condition.
    pub fn debug_check_invariants(&self) {
        debug_assert!(self.active.len() <= MAX_ACTIVE_ENCHANTMENTS);
        if let Some(slot) = self.slot() {
            debug_assert!(
                self.active.iter().all(|e| e.fits(slot)),
                "active enchantment does not fit slot {:?}",
                slot
            );
        }
        let names = self.base_names();
        for (i, name) in names.iter().enumerate() {
            debug_assert!(
                !names[i + 1..].contains(name),
                "duplicate enchantment family {:?}",
                name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EffectType;

    #[test]
    fn test_target_flags_get_set() {
        let mut flags = TargetFlags::new();
        assert!(!flags.get(MonsterKind::Dragon));
        flags.set(MonsterKind::Dragon, true);
        assert!(flags.get(MonsterKind::Dragon));
        assert!(!flags.get(MonsterKind::Undead));
        flags.set(MonsterKind::Dragon, false);
        assert!(!flags.get(MonsterKind::Dragon));
    }

    #[test]
    fn test_new_loadout_is_empty() {
        let loadout = ActiveLoadout::new();
        assert!(loadout.item.is_none());
        assert!(loadout.active.is_empty());
        assert_eq!(loadout.orb_counts.total(), 0);
        assert!(loadout.slot().is_none());
        loadout.debug_check_invariants();
    }

    #[test]
    fn test_labels_and_base_names() {
        let mut loadout = ActiveLoadout::new();
        loadout.active.push(Enchantment {
            name: "Aegis II".to_string(),
            base_name: "Aegis".to_string(),
            tier: 2,
            effect: EffectType::DefenceBoost,
            slots: vec![Slot::Head],
            description: String::new(),
        });
        assert_eq!(loadout.base_names(), vec!["Aegis"]);
        assert_eq!(loadout.active_labels(), vec!["Aegis II".to_string()]);
    }
}
