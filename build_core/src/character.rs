//! Character - equipment and stacking bonuses driving one stat block
//!
//! Every equip, unequip and stack change is translated into `add_stat` /
//! `remove_stat` calls against the same `CharacterStats`, which lives as
//! long as the character does.

use crate::stats::{BaseStats, CharacterStats};
use crate::CharacterError;
use gear_core::{Echo, StackableStat, Stat, Weapon, ECHO_SLOTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A named stackable bonus currently applied to a character
///
/// Entries only exist while `stacks > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtraStat {
    pub stat: Stat,
    pub stacks: u32,
}

/// A character build: stat block, weapon, echo slots and extra stats
#[derive(Debug, Clone)]
pub struct Character {
    pub(crate) stats: CharacterStats,
    pub(crate) echoes: [Option<Echo>; ECHO_SLOTS],
    pub(crate) weapon: Weapon,
    pub(crate) extra_stats: BTreeMap<String, ExtraStat>,
}

impl Character {
    /// Build a character, applying every echo and then the weapon
    pub fn new(base: BaseStats, weapon: Weapon, echoes: [Option<Echo>; ECHO_SLOTS]) -> Self {
        let mut stats = CharacterStats::new(base);
        for echo in echoes.iter().flatten() {
            stats.add_echo(echo);
        }

        let mut character = Character {
            stats,
            echoes,
            weapon: Weapon::unarmed(),
            extra_stats: BTreeMap::new(),
        };
        character.equip_weapon(weapon);
        character
    }

    /// The aggregated stats
    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    /// The equipped weapon
    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    /// All echo slots in order
    pub fn echoes(&self) -> &[Option<Echo>; ECHO_SLOTS] {
        &self.echoes
    }

    /// The echo in a slot, if the slot exists and is filled
    pub fn echo(&self, position: usize) -> Option<&Echo> {
        self.echoes.get(position).and_then(|slot| slot.as_ref())
    }

    /// All applied extra stats
    pub fn extra_stats(&self) -> &BTreeMap<String, ExtraStat> {
        &self.extra_stats
    }

    /// An applied extra stat by key
    pub fn extra_stat(&self, key: &str) -> Option<&ExtraStat> {
        self.extra_stats.get(key)
    }

    /// Current stack count of a key (0 when absent)
    pub fn stacks(&self, key: &str) -> u32 {
        self.extra_stats.get(key).map(|e| e.stacks).unwrap_or(0)
    }

    /// Swap the equipped weapon, returning the previous one
    ///
    /// All stacks of the old weapon's passives are flushed; the new weapon's
    /// passives start at their `min_stacks`.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Weapon {
        let old = std::mem::replace(&mut self.weapon, weapon);

        self.stats.remove_stat(&old.atk_stat());
        self.stats.remove_stat(&old.secondary_stat);
        for key in old.passive_stats.keys() {
            self.delete_extra_stat(key);
        }

        let atk_stat = self.weapon.atk_stat();
        let secondary_stat = self.weapon.secondary_stat;
        self.stats.add_stat(&atk_stat);
        self.stats.add_stat(&secondary_stat);

        let passives: Vec<(String, StackableStat)> = self
            .weapon
            .passive_stats
            .iter()
            .map(|(key, passive)| (key.clone(), *passive))
            .collect();
        for (key, passive) in passives {
            self.add_weapon_stacks(&key, &passive, passive.min_stacks);
        }

        debug!(
            old_atk = old.atk,
            new_atk = self.weapon.atk,
            passives = self.weapon.passive_stats.len(),
            "equipped weapon"
        );
        old
    }

    /// Replace the echo in a slot, returning the previous occupant
    pub fn set_echo(
        &mut self,
        position: usize,
        echo: Option<Echo>,
    ) -> Result<Option<Echo>, CharacterError> {
        let slot = self
            .echoes
            .get_mut(position)
            .ok_or(CharacterError::InvalidEchoSlot(position))?;

        if let Some(old) = slot.as_ref() {
            self.stats.remove_echo(old);
        }
        if let Some(new) = echo.as_ref() {
            self.stats.add_echo(new);
        }

        debug!(position, filled = echo.is_some(), "set echo slot");
        Ok(std::mem::replace(slot, echo))
    }

    /// Add stacks of a named bonus, creating the entry if needed
    ///
    /// Adding zero stacks does nothing, so no zero-stack entry is created.
    pub fn add_extra_stat_stacks(&mut self, key: &str, stat: Stat, stacks: u32) {
        if stacks == 0 {
            return;
        }

        let entry = self
            .extra_stats
            .entry(key.to_string())
            .or_insert(ExtraStat { stat, stacks: 0 });
        let stored = entry.stacks;
        entry.stacks = stored.saturating_add(stacks);
        let added = entry.stacks - stored;
        if added < stacks {
            debug!(key, requested = stacks, added, "extra stat stacks saturated");
        }
        trace!(key, stacks = entry.stacks, "extra stat stacked");

        self.stats.add_stat_stacks(&stat, added);
    }

    /// Remove stacks of a named bonus
    ///
    /// Removing at least as many stacks as are stored flushes the entire
    /// stored count and deletes the key.
    pub fn remove_extra_stat_stacks(&mut self, key: &str, stat: &Stat, stacks: u32) {
        let Some(entry) = self.extra_stats.get_mut(key) else {
            return;
        };

        if entry.stacks <= stacks {
            let stored = entry.stacks;
            self.extra_stats.remove(key);
            self.stats.remove_stat_stacks(stat, stored);
            trace!(key, flushed = stored, "extra stat removed");
            return;
        }

        entry.stacks -= stacks;
        trace!(key, stacks = entry.stacks, "extra stat unstacked");
        self.stats.remove_stat_stacks(stat, stacks);
    }

    /// Fully reverse a named bonus and delete it
    pub fn delete_extra_stat(&mut self, key: &str) -> Option<ExtraStat> {
        let removed = self.extra_stats.remove(key)?;
        self.stats.remove_stat_stacks(&removed.stat, removed.stacks);
        trace!(key, flushed = removed.stacks, "extra stat deleted");
        Some(removed)
    }

    /// Add stacks to a passive of the equipped weapon, capped at `max_stacks`
    pub fn add_stacks_to_weapon_stat(
        &mut self,
        key: &str,
        stacks: u32,
    ) -> Result<(), CharacterError> {
        let passive = self.weapon_passive(key)?;
        self.add_weapon_stacks(key, &passive, stacks);
        Ok(())
    }

    /// Remove stacks from a passive of the equipped weapon, floored at `min_stacks`
    pub fn remove_stacks_from_weapon_stat(
        &mut self,
        key: &str,
        stacks: u32,
    ) -> Result<(), CharacterError> {
        let passive = self.weapon_passive(key)?;
        let current = self.stacks(key);
        let target = passive.clamp_stacks(current.saturating_sub(stacks));
        let allowed = current.saturating_sub(target);
        if allowed == 0 {
            return Ok(());
        }
        if allowed < stacks {
            debug!(key, requested = stacks, allowed, "weapon stacks floored at min");
        }
        self.remove_extra_stat_stacks(key, &passive.stat, allowed);
        Ok(())
    }

    /// A passive of the equipped weapon whose stored stacks are still in range
    ///
    /// Deleting or draining a passive's entry through the generic extra-stat
    /// calls leaves it below `min_stacks`; that state is reported here rather
    /// than silently rebuilt.
    fn weapon_passive(&self, key: &str) -> Result<StackableStat, CharacterError> {
        let passive = self
            .weapon
            .passive(key)
            .copied()
            .ok_or_else(|| CharacterError::UnknownWeaponStat(key.to_string()))?;

        let stacks = self.stacks(key);
        if stacks < passive.min_stacks {
            return Err(CharacterError::WeaponStatBelowMin {
                key: key.to_string(),
                stacks,
                min: passive.min_stacks,
            });
        }
        Ok(passive)
    }

    fn add_weapon_stacks(&mut self, key: &str, passive: &StackableStat, stacks: u32) {
        let current = self.stacks(key);
        let target = passive.clamp_stacks(current.saturating_add(stacks));
        let allowed = target.saturating_sub(current);
        if allowed < stacks {
            debug!(key, requested = stacks, allowed, "weapon stacks capped at max");
        }
        self.add_extra_stat_stacks(key, passive.stat, allowed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::stats_mismatch;
    use gear_core::{MoveType, StatType};
    use proptest::prelude::*;

    fn base() -> BaseStats {
        BaseStats::new(343.0, 7954.0, 899.0)
    }

    fn no_echoes() -> [Option<Echo>; ECHO_SLOTS] {
        [None, None, None, None, None]
    }

    fn stacking_weapon() -> Weapon {
        Weapon::new(445.0, Stat::new(StatType::CritDmg, 0.401))
            .with_passive(
                "always_on",
                StackableStat::new(Stat::new(StatType::AeroDmg, 0.12), 1, 1),
            )
            .with_passive(
                "heavy",
                StackableStat::new(Stat::new(StatType::HeavyDmg, 0.24), 0, 2),
            )
            .with_passive(
                "atk",
                StackableStat::new(Stat::new(StatType::AtkPercent, 0.04), 1, 5),
            )
    }

    fn other_weapon() -> Weapon {
        Weapon::new(500.0, Stat::new(StatType::AtkPercent, 0.3)).with_passive(
            "skill",
            StackableStat::new(Stat::new(StatType::SkillDmg, 0.1), 2, 3),
        )
    }

    fn echo() -> Echo {
        Echo::new(
            3,
            Stat::new(StatType::AeroDmg, 0.3),
            Stat::new(StatType::AtkFlat, 100.0),
        )
        .with_substat(Stat::new(StatType::CritRate, 0.075))
    }

    fn assert_same(left: &CharacterStats, right: &CharacterStats) {
        if let Some(mismatch) = stats_mismatch(left, right, 1e-9, 1e-9) {
            panic!("{}", mismatch);
        }
    }

    #[test]
    fn test_new_applies_weapon_and_min_stacks() {
        let character = Character::new(base(), stacking_weapon(), no_echoes());
        let stats = character.stats();

        assert!((stats.base_atk - 788.0).abs() < 1e-9);
        assert!((stats.crit_dmg - 1.901).abs() < 1e-9);
        assert_eq!(character.stacks("always_on"), 1);
        assert_eq!(character.stacks("atk"), 1);
        // min_stacks 0 leaves no entry behind
        assert!(character.extra_stat("heavy").is_none());
        assert!((stats.atk_percent - 0.04).abs() < 1e-9);
        assert_eq!(stats.move_dmg(MoveType::Heavy), 0.0);
    }

    #[test]
    fn test_new_applies_echoes() {
        let character = Character::new(
            base(),
            Weapon::unarmed(),
            [None, Some(echo()), None, None, Some(echo())],
        );
        assert!((character.stats().atk_flat - 200.0).abs() < 1e-9);
        assert!(character.echo(1).is_some());
        assert!(character.echo(0).is_none());
        assert!(character.echo(7).is_none());
    }

    #[test]
    fn test_weapon_swap_leaves_no_residue() {
        let mut swapped = Character::new(base(), stacking_weapon(), no_echoes());
        swapped.add_stacks_to_weapon_stat("heavy", 2).unwrap();
        swapped.add_stacks_to_weapon_stat("atk", 3).unwrap();
        let old = swapped.equip_weapon(other_weapon());
        assert_eq!(old, stacking_weapon());

        let fresh = Character::new(base(), other_weapon(), no_echoes());
        assert_same(swapped.stats(), fresh.stats());
        assert_eq!(swapped.extra_stats(), fresh.extra_stats());
        assert_eq!(swapped.stacks("skill"), 2);
    }

    #[test]
    fn test_set_echo() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        let before = character.stats().clone();

        assert!(character.set_echo(2, Some(echo())).unwrap().is_none());
        assert!((character.stats().atk_flat - 100.0).abs() < 1e-9);

        // Replacing reverses the old echo first
        let replaced = character.set_echo(2, Some(echo())).unwrap();
        assert!(replaced.is_some());
        assert!((character.stats().atk_flat - 100.0).abs() < 1e-9);

        character.set_echo(2, None).unwrap();
        assert_same(character.stats(), &before);
    }

    #[test]
    fn test_set_echo_out_of_range() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        let before = character.stats().clone();
        let result = character.set_echo(ECHO_SLOTS, Some(echo()));
        assert!(matches!(result, Err(CharacterError::InvalidEchoSlot(5))));
        assert_eq!(character.stats(), &before);
    }

    #[test]
    fn test_extra_stat_lifecycle() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        let crit = Stat::new(StatType::CritRate, 0.012);

        character.add_extra_stat_stacks("talent", crit, 2);
        character.add_extra_stat_stacks("talent", crit, 1);
        assert_eq!(character.stacks("talent"), 3);
        assert!((character.stats().crit_rate - (0.05 + 0.036)).abs() < 1e-9);

        character.remove_extra_stat_stacks("talent", &crit, 1);
        assert_eq!(character.stacks("talent"), 2);
        assert!((character.stats().crit_rate - (0.05 + 0.024)).abs() < 1e-9);

        character.remove_extra_stat_stacks("talent", &crit, 2);
        assert!(character.extra_stat("talent").is_none());
        assert!((character.stats().crit_rate - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_zero_flush_removes_full_stored_amount() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        let atk = Stat::new(StatType::AtkPercent, 0.018);
        character.add_extra_stat_stacks("buff", atk, 3);

        // Asking for 10 only flushes the 3 stored stacks
        character.remove_extra_stat_stacks("buff", &atk, 10);
        assert!(character.extra_stat("buff").is_none());
        assert!(character.stats().atk_percent.abs() < 1e-12);
    }

    #[test]
    fn test_zero_stack_add_creates_nothing() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        character.add_extra_stat_stacks("noop", Stat::new(StatType::HpFlat, 10.0), 0);
        assert!(character.extra_stats().is_empty());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        let before = character.stats().clone();
        character.remove_extra_stat_stacks("ghost", &Stat::new(StatType::HpFlat, 10.0), 1);
        assert!(character.delete_extra_stat("ghost").is_none());
        assert_eq!(character.stats(), &before);
    }

    #[test]
    fn test_delete_extra_stat() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        character.add_extra_stat_stacks("buff", Stat::new(StatType::HpPercent, 0.1), 4);
        let removed = character.delete_extra_stat("buff").unwrap();
        assert_eq!(removed.stacks, 4);
        assert!(character.stats().hp_percent.abs() < 1e-12);
    }

    #[test]
    fn test_weapon_passive_adds_heavy_bonus() {
        let mut character = Character::new(base(), stacking_weapon(), no_echoes());
        let before = character.stats().move_dmg(MoveType::Heavy);
        character.add_stacks_to_weapon_stat("heavy", 2).unwrap();
        let after = character.stats().move_dmg(MoveType::Heavy);
        assert!((after - before - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_weapon_stacks_clamped() {
        let mut character = Character::new(base(), stacking_weapon(), no_echoes());

        character.add_stacks_to_weapon_stat("heavy", 5).unwrap();
        assert_eq!(character.stacks("heavy"), 2);
        assert!((character.stats().move_dmg(MoveType::Heavy) - 0.48).abs() < 1e-12);

        // Already at max
        character.add_stacks_to_weapon_stat("heavy", 1).unwrap();
        assert_eq!(character.stacks("heavy"), 2);

        // Floor of zero removes the entry entirely
        character.remove_stacks_from_weapon_stat("heavy", 9).unwrap();
        assert!(character.extra_stat("heavy").is_none());
        assert!(character.stats().move_dmg(MoveType::Heavy).abs() < 1e-12);

        // Already at min
        character.remove_stacks_from_weapon_stat("heavy", 1).unwrap();
        assert!(character.extra_stat("heavy").is_none());

        // Floor of one keeps the entry
        character.add_stacks_to_weapon_stat("atk", 4).unwrap();
        assert_eq!(character.stacks("atk"), 5);
        character.remove_stacks_from_weapon_stat("atk", 10).unwrap();
        assert_eq!(character.stacks("atk"), 1);
        assert!((character.stats().atk_percent - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_weapon_stat() {
        let mut character = Character::new(base(), stacking_weapon(), no_echoes());
        character.add_extra_stat_stacks("talent", Stat::new(StatType::CritRate, 0.01), 1);

        let add = character.add_stacks_to_weapon_stat("talent", 1);
        assert!(matches!(add, Err(CharacterError::UnknownWeaponStat(ref k)) if k == "talent"));
        let remove = character.remove_stacks_from_weapon_stat("missing", 1);
        assert!(matches!(remove, Err(CharacterError::UnknownWeaponStat(_))));
        assert_eq!(character.stacks("talent"), 1);
    }

    #[test]
    fn test_deleted_weapon_stat_is_reported() {
        let mut character = Character::new(base(), stacking_weapon(), no_echoes());
        character.delete_extra_stat("atk").unwrap();
        let atk_percent = character.stats().atk_percent;

        let remove = character.remove_stacks_from_weapon_stat("atk", 1);
        assert!(matches!(
            remove,
            Err(CharacterError::WeaponStatBelowMin { ref key, stacks: 0, min: 1 }) if key == "atk"
        ));
        let add = character.add_stacks_to_weapon_stat("atk", 1);
        assert!(matches!(add, Err(CharacterError::WeaponStatBelowMin { .. })));

        assert!(character.extra_stat("atk").is_none());
        assert!((character.stats().atk_percent - atk_percent).abs() < f64::EPSILON);

        // Re-equipping restores the floor
        character.equip_weapon(stacking_weapon());
        character.add_stacks_to_weapon_stat("atk", 1).unwrap();
        assert_eq!(character.stacks("atk"), 2);
    }

    #[test]
    fn test_drained_weapon_stat_is_reported() {
        let weapon = Weapon::new(445.0, Stat::new(StatType::CritDmg, 0.401)).with_passive(
            "atk",
            StackableStat::new(Stat::new(StatType::AtkPercent, 0.04), 2, 5),
        );
        let mut character = Character::new(base(), weapon, no_echoes());
        let atk = Stat::new(StatType::AtkPercent, 0.04);
        character.remove_extra_stat_stacks("atk", &atk, 1);
        assert_eq!(character.stacks("atk"), 1);

        let add = character.add_stacks_to_weapon_stat("atk", 1);
        assert!(matches!(
            add,
            Err(CharacterError::WeaponStatBelowMin { stacks: 1, min: 2, .. })
        ));
        assert!(character.remove_stacks_from_weapon_stat("atk", 1).is_err());
        assert_eq!(character.stacks("atk"), 1);
        assert!((character.stats().atk_percent - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_extra_stat_stacks_saturate() {
        let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
        let stat = Stat::new(StatType::DefFlat, 1.0);
        character.add_extra_stat_stacks("buff", stat, u32::MAX);
        let def_flat = character.stats().def_flat;

        character.add_extra_stat_stacks("buff", stat, 1);
        assert_eq!(character.stacks("buff"), u32::MAX);
        assert_eq!(character.stats().def_flat, def_flat);

        character.delete_extra_stat("buff").unwrap();
        assert!(character.stats().def_flat.abs() < 1e-6);
    }

    #[test]
    fn test_old_weapon_stats_rejected_after_swap() {
        let mut character = Character::new(base(), stacking_weapon(), no_echoes());
        character.equip_weapon(other_weapon());
        assert!(character.add_stacks_to_weapon_stat("heavy", 1).is_err());
    }

    proptest! {
        #[test]
        fn prop_weapon_stacks_stay_in_range(ops in prop::collection::vec((any::<bool>(), 0u32..6), 0..30)) {
            let mut character = Character::new(base(), stacking_weapon(), no_echoes());
            for (add, stacks) in ops {
                if add {
                    character.add_stacks_to_weapon_stat("atk", stacks).unwrap();
                } else {
                    character.remove_stacks_from_weapon_stat("atk", stacks).unwrap();
                }
                let current = character.stacks("atk");
                prop_assert!((1..=5).contains(&current));
                let expected = 0.04 * current as f64;
                prop_assert!((character.stats().atk_percent - expected).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_extra_stats_never_zero(ops in prop::collection::vec((any::<bool>(), 0u32..4), 0..30)) {
            let mut character = Character::new(base(), Weapon::unarmed(), no_echoes());
            let stat = Stat::new(StatType::DefFlat, 10.0);
            for (add, stacks) in ops {
                if add {
                    character.add_extra_stat_stacks("buff", stat, stacks);
                } else {
                    character.remove_extra_stat_stacks("buff", &stat, stacks);
                }
                prop_assert!(character.extra_stats().values().all(|e| e.stacks > 0));
                let expected = 10.0 * character.stacks("buff") as f64;
                prop_assert!((character.stats().def_flat - expected).abs() < 1e-9);
            }
        }
    }
}
