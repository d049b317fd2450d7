use serde::{Deserialize, Serialize};

/// All five skills sit at 99; there is no combat-level input in the core.
pub const BASE_SKILL_LEVEL: i32 = 99;
/// Stance bonus folded into the attacker's effective levels.
pub const ATTACKER_STANCE_BONUS: i32 = 8;
/// Stance bonus folded into the target's effective defence level.
pub const DEFENDER_STANCE_BONUS: i32 = 9;
/// Flat gear offset added to every roll's bonus term.
pub const ROLL_GEAR_OFFSET: i32 = 64;
/// Divisor in the max-hit formula.
pub const MAX_HIT_DIVISOR: i32 = 640;
/// Seconds per attack; fixed for every weapon.
pub const ATTACK_INTERVAL_SECONDS: f64 = 2.4;
/// Crit damage factor before any crit-damage enchantment.
pub const BASE_CRIT_MULTIPLIER: f64 = 1.5;

/// Per-tier enchantment contributions. Tiers past the table clamp to the
/// last entry.
pub const DEFENCE_BOOST_BY_TIER: [i32; 3] = [20, 25, 30];
pub const CRIT_CHANCE_BY_TIER: [f64; 3] = [0.05, 0.07, 0.10];
pub const CRIT_DAMAGE_BY_TIER: [f64; 3] = [0.20, 0.25, 0.30];
pub const DOUBLE_HIT_BY_TIER: [f64; 3] = [0.05, 0.10, 0.15];
pub const BANE_BY_TIER: [f64; 3] = [0.02, 0.03, 0.05];

fn tier_index(tier: u8, len: usize) -> usize {
    (tier.max(1) as usize - 1).min(len - 1)
}

pub fn defence_boost(tier: u8) -> i32 {
    DEFENCE_BOOST_BY_TIER[tier_index(tier, DEFENCE_BOOST_BY_TIER.len())]
}

pub fn crit_chance_bonus(tier: u8) -> f64 {
    CRIT_CHANCE_BY_TIER[tier_index(tier, CRIT_CHANCE_BY_TIER.len())]
}

pub fn crit_damage_bonus(tier: u8) -> f64 {
    CRIT_DAMAGE_BY_TIER[tier_index(tier, CRIT_DAMAGE_BY_TIER.len())]
}

pub fn double_hit_bonus(tier: u8) -> f64 {
    DOUBLE_HIT_BY_TIER[tier_index(tier, DOUBLE_HIT_BY_TIER.len())]
}

pub fn bane_bonus(tier: u8) -> f64 {
    BANE_BY_TIER[tier_index(tier, BANE_BY_TIER.len())]
}

/// The five headline stats shown for any equipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub attack: i32,
    pub strength: i32,
    pub defence: i32,
    pub magic: i32,
    pub ranged: i32,
}

/// Everything the DPS panel displays for a weapon build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpsBreakdown {
    pub accuracy: f64,
    pub max_hit: i32,
    pub dps: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub double_hit_chance: f64,
    pub damage_multiplier: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_tables() {
        assert_eq!(defence_boost(1), 20);
        assert_eq!(defence_boost(2), 25);
        assert_eq!(defence_boost(3), 30);
        assert!((crit_chance_bonus(2) - 0.07).abs() < f64::EPSILON);
        assert!((crit_damage_bonus(3) - 0.30).abs() < f64::EPSILON);
        assert!((double_hit_bonus(1) - 0.05).abs() < f64::EPSILON);
        assert!((bane_bonus(3) - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tier_tables_clamp_out_of_range() {
        // tier 0 reads as tier 1, tiers past the table read as the last entry
        assert_eq!(defence_boost(0), 20);
        assert_eq!(defence_boost(5), 30);
        assert!((bane_bonus(5) - 0.05).abs() < f64::EPSILON);
    }
}
