use super::types::{EffectType, Enchantment, Item, Slot};

/// Read-only index over the two catalog collections. Built once at startup;
/// an empty index is valid and simply answers every query with nothing.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    items: Vec<Item>,
    enchantments: Vec<Enchantment>,
}

impl CatalogIndex {
    pub fn new(items: Vec<Item>, enchantments: Vec<Enchantment>) -> Self {
        Self { items, enchantments }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.enchantments.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn enchantments(&self) -> &[Enchantment] {
        &self.enchantments
    }

    pub fn item_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolve an item by name, case-insensitively. An exact name match is
    /// preferred; otherwise the first item whose name contains the fragment
    /// wins, so "iron sword" resolves before "Iron sword (t)".
    pub fn item_by_name_fragment(&self, fragment: &str) -> Option<&Item> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.items
            .iter()
            .find(|item| item.name.to_lowercase() == needle)
            .or_else(|| {
                self.items
                    .iter()
                    .find(|item| item.name.to_lowercase().contains(&needle))
            })
    }

    /// Equipable items in a slot whose name contains `search`
    /// (case-insensitive; empty search matches everything).
    pub fn items_for_slot(&self, slot: Slot, search: &str) -> Vec<&Item> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.equipable && item.slot == slot)
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Family base names with at least one tier attachable to `slot`,
    /// deduplicated in first-appearance order.
    pub fn families_for_slot(&self, slot: Slot) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for ench in &self.enchantments {
            if ench.fits(slot) && !families.contains(&ench.base_name.as_str()) {
                families.push(&ench.base_name);
            }
        }
        families
    }

    /// All tiers of a family attachable to `slot`, ascending by tier.
    pub fn tiers_of(&self, base_name: &str, slot: Slot) -> Vec<&Enchantment> {
        let mut tiers: Vec<&Enchantment> = self
            .enchantments
            .iter()
            .filter(|e| e.base_name == base_name && e.fits(slot))
            .collect();
        tiers.sort_by_key(|e| e.tier);
        tiers
    }

    /// Whether a strictly higher tier of the family exists for `slot`.
    pub fn has_higher_tier(&self, base_name: &str, slot: Slot, tier: u8) -> bool {
        self.enchantments
            .iter()
            .any(|e| e.base_name == base_name && e.fits(slot) && e.tier > tier)
    }

    /// Highest tier per family for a slot, in family first-appearance order.
    /// Backs the "available enchantments" listing.
    pub fn best_tiers_for_slot(&self, slot: Slot) -> Vec<&Enchantment> {
        self.families_for_slot(slot)
            .into_iter()
            .filter_map(|base| self.tiers_of(base, slot).into_iter().last())
            .collect()
    }

    /// Resolve an (effect, tier) pair to a concrete enchantment attachable
    /// to `slot`. Used by the seed codec.
    pub fn find_enchantment(&self, effect: EffectType, tier: u8, slot: Slot) -> Option<&Enchantment> {
        self.enchantments
            .iter()
            .find(|e| e.effect == effect && e.tier == tier && e.fits(slot))
    }
}
