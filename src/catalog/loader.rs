//! Parsing for the two external JSON data sets. Tolerant by design: only
//! structurally-malformed JSON is an error; individual records that cannot
//! be resolved (unknown slot, unknown effect code) are dropped.

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use super::index::CatalogIndex;
use super::types::{strip_tier_suffix, CombatBonuses, EffectType, Enchantment, Item, Slot};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: u32,
    name: String,
    #[serde(default, rename = "equipable_by_player")]
    equipable: bool,
    #[serde(default)]
    equipment: Option<EquipmentRecord>,
}

#[derive(Debug, Deserialize)]
struct EquipmentRecord {
    slot: String,
    #[serde(flatten)]
    bonuses: CombatBonuses,
}

/// The items collection ships either as a map keyed by item id or as a
/// plain array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemsFile {
    Map(BTreeMap<String, ItemRecord>),
    List(Vec<ItemRecord>),
}

#[derive(Debug, Deserialize)]
struct EnchantmentRecord {
    name: String,
    tier: u8,
    effect: String,
    slots: Vec<String>,
    #[serde(default)]
    description: String,
}

/// Parse the items collection. Records without an equipment block or with
/// an unrecognized slot are dropped.
pub fn load_items(json: &str) -> Result<Vec<Item>, CatalogError> {
    let file: ItemsFile = serde_json::from_str(json)?;
    let records = match file {
        ItemsFile::Map(map) => {
            let mut records: Vec<ItemRecord> = map.into_values().collect();
            records.sort_by_key(|r| r.id);
            records
        }
        ItemsFile::List(list) => list,
    };
    Ok(records.into_iter().filter_map(convert_item).collect())
}

fn convert_item(record: ItemRecord) -> Option<Item> {
    let equipment = match record.equipment {
        Some(e) => e,
        None => {
            debug!("dropping item {:?}: no equipment block", record.name);
            return None;
        }
    };
    let slot = match Slot::parse(&equipment.slot) {
        Some(s) => s,
        None => {
            debug!("dropping item {:?}: unknown slot {:?}", record.name, equipment.slot);
            return None;
        }
    };
    Some(Item {
        id: record.id,
        name: record.name,
        equipable: record.equipable,
        slot,
        bonuses: equipment.bonuses,
    })
}

/// Parse the enchantments collection. Base names are derived here, once,
/// from the display names. Records with an unknown effect code are dropped;
/// unknown slot strings within a record are ignored.
pub fn load_enchantments(json: &str) -> Result<Vec<Enchantment>, CatalogError> {
    let records: Vec<EnchantmentRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .filter_map(|record| {
            let effect = match EffectType::from_code(&record.effect) {
                Some(e) => e,
                None => {
                    debug!(
                        "dropping enchantment {:?}: unknown effect {:?}",
                        record.name, record.effect
                    );
                    return None;
                }
            };
            let slots: Vec<Slot> = record.slots.iter().filter_map(|s| Slot::parse(s)).collect();
            Some(Enchantment {
                base_name: strip_tier_suffix(&record.name).to_string(),
                name: record.name,
                tier: record.tier,
                effect,
                slots,
                description: record.description,
            })
        })
        .collect())
}

/// Parse both collections and build the index in one step.
pub fn load_catalog(items_json: &str, enchantments_json: &str) -> Result<CatalogIndex, CatalogError> {
    Ok(CatalogIndex::new(
        load_items(items_json)?,
        load_enchantments(enchantments_json)?,
    ))
}
