//! Pure stat and DPS math. No randomness here; everything is a closed-form
//! function of the item, its active enchantments, and the target toggles.

use super::types::*;
use crate::catalog::{EffectType, Enchantment, Item};
use crate::session::TargetFlags;

/// Aggregate the item's bonuses with enchantment contributions. Only the
/// defence-boost family moves these numbers; the crit/double-hit families
/// show up in the DPS breakdown instead, and the inert categories nowhere.
pub fn compute_stats(item: &Item, active: &[Enchantment]) -> AggregateStats {
    let mut stats = AggregateStats {
        attack: item.bonuses.attack_total(),
        strength: item.bonuses.melee_strength,
        defence: item.bonuses.defence_total(),
        magic: item.bonuses.magic_damage,
        ranged: item.bonuses.ranged_strength,
    };
    for ench in active {
        if ench.effect == EffectType::DefenceBoost {
            stats.defence += defence_boost(ench.tier);
        }
    }
    stats
}

/// Combined multiplier from conditional bane enchantments whose target
/// toggle is on. Qualifying bonuses compound multiplicatively; the result
/// applies to both accuracy and damage.
fn conditional_multiplier(active: &[Enchantment], targets: &TargetFlags) -> f64 {
    let mut multiplier = 1.0;
    for ench in active {
        if let Some(kind) = ench.effect.bane_target() {
            if targets.get(kind) {
                multiplier *= 1.0 + bane_bonus(ench.tier);
            }
        }
    }
    multiplier
}

/// DPS estimate for a weapon build against a fixed level-99, zero-bonus
/// target. Only meaningful for weapon-slot items; the shell decides when to
/// show it.
pub fn compute_dps(item: &Item, active: &[Enchantment], targets: &TargetFlags) -> DpsBreakdown {
    let mut crit_chance = 0.0;
    let mut crit_multiplier = BASE_CRIT_MULTIPLIER;
    let mut double_hit_chance = 0.0;
    for ench in active {
        match ench.effect {
            EffectType::CritChance => crit_chance += crit_chance_bonus(ench.tier),
            EffectType::CritDamage => crit_multiplier += crit_damage_bonus(ench.tier),
            EffectType::DoubleHit => double_hit_chance += double_hit_bonus(ench.tier),
            _ => {}
        }
    }
    let conditional = conditional_multiplier(active, targets);

    let effective_strength = BASE_SKILL_LEVEL + ATTACKER_STANCE_BONUS;
    let max_hit =
        (effective_strength * (item.bonuses.melee_strength + ROLL_GEAR_OFFSET) / MAX_HIT_DIVISOR)
            .max(0);

    let effective_attack = BASE_SKILL_LEVEL + ATTACKER_STANCE_BONUS;
    let attack_roll = effective_attack * (item.bonuses.attack_total() + ROLL_GEAR_OFFSET);
    let defence_roll = (BASE_SKILL_LEVEL + DEFENDER_STANCE_BONUS) * ROLL_GEAR_OFFSET;

    let raw_accuracy = if attack_roll > defence_roll {
        1.0 - (defence_roll + 2) as f64 / (2.0 * (attack_roll + 1) as f64)
    } else {
        attack_roll as f64 / (2.0 * (defence_roll + 1) as f64)
    };
    let accuracy = (raw_accuracy * conditional).min(1.0);

    let damage_multiplier = conditional;
    let hit = max_hit as f64;
    let mut average_damage =
        (hit / 2.0) * (1.0 - crit_chance) + (hit * crit_multiplier / 2.0) * crit_chance;
    if double_hit_chance > 0.0 {
        average_damage =
            average_damage * (1.0 - double_hit_chance) + (average_damage * 2.0) * double_hit_chance;
    }
    average_damage *= damage_multiplier;

    DpsBreakdown {
        accuracy,
        max_hit,
        dps: average_damage * accuracy / ATTACK_INTERVAL_SECONDS,
        attack_speed: ATTACK_INTERVAL_SECONDS,
        crit_chance,
        crit_multiplier,
        double_hit_chance,
        damage_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CombatBonuses, Slot};

    fn bare_weapon() -> Item {
        Item {
            id: 1,
            name: "Training sword".to_string(),
            equipable: true,
            slot: Slot::Weapon,
            bonuses: CombatBonuses::default(),
        }
    }

    fn ench(effect: EffectType, tier: u8) -> Enchantment {
        Enchantment {
            name: format!("Test {}", tier),
            base_name: "Test".to_string(),
            tier,
            effect,
            slots: vec![Slot::Weapon],
            description: String::new(),
        }
    }

    #[test]
    fn test_stats_from_item_bonuses_only() {
        let mut item = bare_weapon();
        item.bonuses.attack_stab = 10;
        item.bonuses.attack_magic = 2;
        item.bonuses.melee_strength = 15;
        item.bonuses.defence_slash = 4;
        item.bonuses.magic_damage = 1;
        item.bonuses.ranged_strength = 3;
        let stats = compute_stats(&item, &[]);
        assert_eq!(stats.attack, 12);
        assert_eq!(stats.strength, 15);
        assert_eq!(stats.defence, 4);
        assert_eq!(stats.magic, 1);
        assert_eq!(stats.ranged, 3);
    }

    #[test]
    fn test_defence_boost_tier_two_adds_exactly_25() {
        let item = bare_weapon();
        let baseline = compute_stats(&item, &[]);
        let boosted = compute_stats(&item, &[ench(EffectType::DefenceBoost, 2)]);
        assert_eq!(boosted.defence, baseline.defence + 25);
        assert_eq!(boosted.attack, baseline.attack);
        assert_eq!(boosted.strength, baseline.strength);
        assert_eq!(boosted.magic, baseline.magic);
        assert_eq!(boosted.ranged, baseline.ranged);
    }

    #[test]
    fn test_inert_effects_change_nothing() {
        let item = bare_weapon();
        let baseline = compute_stats(&item, &[]);
        let flags = TargetFlags::new();
        let base_dps = compute_dps(&item, &[], &flags);
        for effect in [
            EffectType::LifeSteal,
            EffectType::Reflection,
            EffectType::Swiftness,
            EffectType::Fortune,
            EffectType::RuneWard,
        ] {
            let active = [ench(effect, 3)];
            assert_eq!(compute_stats(&item, &active), baseline);
            assert_eq!(compute_dps(&item, &active, &flags), base_dps);
        }
    }

    #[test]
    fn test_dps_zero_bonus_scenario() {
        let item = bare_weapon();
        let result = compute_dps(&item, &[], &TargetFlags::new());
        assert_eq!(result.max_hit, 10);
        // attack roll 6848 vs defence roll 6912: the low-roll branch
        let expected_accuracy = 6848.0 / (2.0 * 6913.0);
        assert!((result.accuracy - expected_accuracy).abs() < 1e-9);
        let expected_dps = (10.0 / 2.0) * expected_accuracy / 2.4;
        assert!((result.dps - expected_dps).abs() < 1e-9);
        assert!((result.dps - 1.031).abs() < 1e-3);
        assert!((result.attack_speed - 2.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dps_high_accuracy_branch() {
        let mut item = bare_weapon();
        item.bonuses.attack_slash = 100;
        let result = compute_dps(&item, &[], &TargetFlags::new());
        // attack roll 107 * 164 = 17548 > 6912
        let expected = 1.0 - 6914.0 / (2.0 * 17549.0);
        assert!((result.accuracy - expected).abs() < 1e-9);
    }

    #[test]
    fn test_crit_enchantments_raise_average_damage() {
        let mut item = bare_weapon();
        item.bonuses.melee_strength = 50;
        let flags = TargetFlags::new();
        let base = compute_dps(&item, &[], &flags);
        let critty = compute_dps(
            &item,
            &[ench(EffectType::CritChance, 3), ench(EffectType::CritDamage, 1)],
            &flags,
        );
        assert!((critty.crit_chance - 0.10).abs() < f64::EPSILON);
        assert!((critty.crit_multiplier - (BASE_CRIT_MULTIPLIER + 0.20)).abs() < f64::EPSILON);
        assert!(critty.dps > base.dps);
        assert_eq!(critty.max_hit, base.max_hit);
    }

    #[test]
    fn test_double_hit_blend() {
        let item = bare_weapon();
        let flags = TargetFlags::new();
        let result = compute_dps(&item, &[ench(EffectType::DoubleHit, 1)], &flags);
        // avg 5.0 blended: 5 * 0.95 + 10 * 0.05 = 5.25
        let expected_avg = 5.0 * (1.0 - 0.05) + 10.0 * 0.05;
        let expected_dps = expected_avg * result.accuracy / 2.4;
        assert!((result.dps - expected_dps).abs() < 1e-9);
    }

    #[test]
    fn test_bane_requires_matching_flag() {
        let item = bare_weapon();
        let active = [ench(EffectType::BaneDragon, 2)];
        let off = compute_dps(&item, &active, &TargetFlags::new());
        assert!((off.damage_multiplier - 1.0).abs() < f64::EPSILON);

        let mut flags = TargetFlags::new();
        flags.dragon = true;
        let on = compute_dps(&item, &active, &flags);
        assert!((on.damage_multiplier - 1.03).abs() < 1e-9);
        assert!(on.accuracy > off.accuracy);
        assert!(on.dps > off.dps);
    }

    #[test]
    fn test_multiple_banes_compound_multiplicatively() {
        let item = bare_weapon();
        let mut undead = ench(EffectType::BaneUndead, 1);
        undead.base_name = "Undead Bane".to_string();
        let mut demon = ench(EffectType::BaneDemon, 3);
        demon.base_name = "Demon Bane".to_string();
        let mut flags = TargetFlags::new();
        flags.undead = true;
        flags.demon = true;
        let result = compute_dps(&item, &[undead, demon], &flags);
        assert!((result.damage_multiplier - 1.02 * 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_clamped_at_one() {
        let mut item = bare_weapon();
        item.bonuses.attack_stab = 100_000;
        let mut flags = TargetFlags::new();
        flags.undead = true;
        let result = compute_dps(&item, &[ench(EffectType::BaneUndead, 3)], &flags);
        assert!(result.accuracy <= 1.0);
    }

    #[test]
    fn test_negative_strength_floors_max_hit_at_zero() {
        let mut item = bare_weapon();
        item.bonuses.melee_strength = -200;
        let result = compute_dps(&item, &[], &TargetFlags::new());
        assert_eq!(result.max_hit, 0);
        assert!((result.dps - 0.0).abs() < f64::EPSILON);
    }
}
