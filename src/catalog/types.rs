use serde::{Deserialize, Serialize};

/// Equipment slot an item occupies. `TwoHanded` is a distinct slot in the
/// item data; no enchantment lists it, so orb operations on such items find
/// no eligible families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Head,
    Cape,
    Neck,
    Weapon,
    #[serde(rename = "2h")]
    TwoHanded,
    Body,
    Shield,
    Legs,
    Hands,
    Feet,
    Ring,
}

impl Slot {
    pub const ALL: [Slot; 11] = [
        Slot::Head,
        Slot::Cape,
        Slot::Neck,
        Slot::Weapon,
        Slot::TwoHanded,
        Slot::Body,
        Slot::Shield,
        Slot::Legs,
        Slot::Hands,
        Slot::Feet,
        Slot::Ring,
    ];

    /// Lowercase key used in item data and in seed strings.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Head => "head",
            Slot::Cape => "cape",
            Slot::Neck => "neck",
            Slot::Weapon => "weapon",
            Slot::TwoHanded => "2h",
            Slot::Body => "body",
            Slot::Shield => "shield",
            Slot::Legs => "legs",
            Slot::Hands => "hands",
            Slot::Feet => "feet",
            Slot::Ring => "ring",
        }
    }

    /// Case-insensitive parse; accepts both the item-data keys ("head") and
    /// the uppercase keys the enchantment data uses ("HEAD").
    pub fn parse(s: &str) -> Option<Slot> {
        let lower = s.trim().to_lowercase();
        Slot::ALL.iter().copied().find(|slot| slot.key() == lower)
    }
}

/// Numeric combat bonuses carried by an item. All fields default to zero so
/// partial item records load cleanly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatBonuses {
    pub attack_stab: i32,
    pub attack_slash: i32,
    pub attack_crush: i32,
    pub attack_magic: i32,
    pub attack_ranged: i32,
    pub melee_strength: i32,
    pub defence_stab: i32,
    pub defence_slash: i32,
    pub defence_crush: i32,
    pub defence_magic: i32,
    pub magic_damage: i32,
    pub ranged_strength: i32,
}

impl CombatBonuses {
    /// Sum of the five directional attack bonuses.
    pub fn attack_total(&self) -> i32 {
        self.attack_stab + self.attack_slash + self.attack_crush + self.attack_magic
            + self.attack_ranged
    }

    /// Sum of the four directional defence bonuses.
    pub fn defence_total(&self) -> i32 {
        self.defence_stab + self.defence_slash + self.defence_crush + self.defence_magic
    }
}

/// An equippable (or not) item from the catalog. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub equipable: bool,
    pub slot: Slot,
    pub bonuses: CombatBonuses,
}

/// Monster categories the conditional "bane" enchantments key off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterKind {
    Undead,
    Dragon,
    Demon,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Undead, MonsterKind::Dragon, MonsterKind::Demon];

    pub fn key(&self) -> &'static str {
        match self {
            MonsterKind::Undead => "undead",
            MonsterKind::Dragon => "dragon",
            MonsterKind::Demon => "demon",
        }
    }
}

/// What an enchantment does. The first seven variants have numeric effects;
/// the rest are carried in the data but intentionally contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    DefenceBoost,
    CritChance,
    CritDamage,
    DoubleHit,
    BaneUndead,
    BaneDragon,
    BaneDemon,
    // Inert categories, reserved in the data.
    LifeSteal,
    Reflection,
    Swiftness,
    Fortune,
    RuneWard,
}

impl EffectType {
    pub const ALL: [EffectType; 12] = [
        EffectType::DefenceBoost,
        EffectType::CritChance,
        EffectType::CritDamage,
        EffectType::DoubleHit,
        EffectType::BaneUndead,
        EffectType::BaneDragon,
        EffectType::BaneDemon,
        EffectType::LifeSteal,
        EffectType::Reflection,
        EffectType::Swiftness,
        EffectType::Fortune,
        EffectType::RuneWard,
    ];

    /// Stable code used in data files and seed strings.
    pub fn code(&self) -> &'static str {
        match self {
            EffectType::DefenceBoost => "defence_boost",
            EffectType::CritChance => "crit_chance",
            EffectType::CritDamage => "crit_damage",
            EffectType::DoubleHit => "double_hit",
            EffectType::BaneUndead => "bane_undead",
            EffectType::BaneDragon => "bane_dragon",
            EffectType::BaneDemon => "bane_demon",
            EffectType::LifeSteal => "life_steal",
            EffectType::Reflection => "reflection",
            EffectType::Swiftness => "swiftness",
            EffectType::Fortune => "fortune",
            EffectType::RuneWard => "rune_ward",
        }
    }

    pub fn from_code(s: &str) -> Option<EffectType> {
        EffectType::ALL.iter().copied().find(|e| e.code() == s)
    }

    /// The monster category a conditional bane effect targets, if any.
    pub fn bane_target(&self) -> Option<MonsterKind> {
        match self {
            EffectType::BaneUndead => Some(MonsterKind::Undead),
            EffectType::BaneDragon => Some(MonsterKind::Dragon),
            EffectType::BaneDemon => Some(MonsterKind::Demon),
            _ => None,
        }
    }
}

/// One tier of an enchantment family. `base_name` is precomputed at load
/// time by stripping the trailing roman-numeral token from `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enchantment {
    pub name: String,
    pub base_name: String,
    pub tier: u8,
    pub effect: EffectType,
    pub slots: Vec<Slot>,
    pub description: String,
}

impl Enchantment {
    pub fn fits(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    /// Display label: base name plus roman numeral, e.g. "Aegis III".
    pub fn label(&self) -> String {
        let numeral = tier_numeral(self.tier);
        if numeral.is_empty() {
            self.base_name.clone()
        } else {
            format!("{} {}", self.base_name, numeral)
        }
    }
}

const ROMAN_TIERS: [&str; 5] = ["I", "II", "III", "IV", "V"];

/// Roman numeral for a tier, or "" for 0 or beyond V.
pub fn tier_numeral(tier: u8) -> &'static str {
    match tier {
        1..=5 => ROMAN_TIERS[(tier - 1) as usize],
        _ => "",
    }
}

/// Strip a trailing roman-numeral token (I through V) from a display name.
pub fn strip_tier_suffix(name: &str) -> &str {
    if let Some((base, last)) = name.trim_end().rsplit_once(' ') {
        if ROMAN_TIERS.contains(&last) {
            return base.trim_end();
        }
    }
    name.trim()
}
