//! Damage calculation - turning a move + stats into damage numbers

use super::DamageRoll;
use crate::config::{constants, DamageConstants};
use crate::defense::{enemy_resistance_factor, ResistanceModifiers};
use crate::stats::CharacterStats;
use gear_core::Move;
use rand::Rng;

impl CharacterStats {
    /// Damage before enemy mitigation, without crit
    ///
    /// Move-type and elemental bonuses add together before scaling ATK.
    pub fn get_move_base_dmg(&self, mv: &Move) -> f64 {
        let bonus = 1.0 + self.move_dmg(mv.move_type) + self.element_dmg(mv.element);
        self.get_atk() * mv.multiplier * bonus
    }

    /// Damage before enemy mitigation, assuming a crit
    pub fn get_move_base_dmg_crit(&self, mv: &Move) -> f64 {
        self.get_move_base_dmg(mv) * self.crit_dmg
    }

    /// Expected damage before enemy mitigation, weighting crits by crit rate
    pub fn get_move_base_dmg_avg(&self, mv: &Move) -> f64 {
        self.get_move_base_dmg(mv) * (1.0 + self.crit_rate * (self.crit_dmg - 1.0))
    }

    /// Enemy resistance factor with neutral modifiers and the global constants
    pub fn get_enemy_resistance(&self, character_level: u32, enemy_level: u32) -> f64 {
        self.get_enemy_resistance_with(
            character_level,
            enemy_level,
            &ResistanceModifiers::default(),
            constants(),
        )
    }

    /// Enemy resistance factor with explicit modifiers and constants
    pub fn get_enemy_resistance_with(
        &self,
        character_level: u32,
        enemy_level: u32,
        modifiers: &ResistanceModifiers,
        constants: &DamageConstants,
    ) -> f64 {
        enemy_resistance_factor(character_level, enemy_level, modifiers, constants)
    }

    /// Non-crit damage against an enemy
    pub fn get_move_dmg(&self, mv: &Move, character_level: u32, enemy_level: u32) -> f64 {
        self.get_move_base_dmg(mv) * self.get_enemy_resistance(character_level, enemy_level)
    }

    /// Crit damage against an enemy
    pub fn get_move_dmg_crit(&self, mv: &Move, character_level: u32, enemy_level: u32) -> f64 {
        self.get_move_base_dmg_crit(mv) * self.get_enemy_resistance(character_level, enemy_level)
    }

    /// Expected damage against an enemy
    pub fn get_move_dmg_avg(&self, mv: &Move, character_level: u32, enemy_level: u32) -> f64 {
        self.get_move_base_dmg_avg(mv) * self.get_enemy_resistance(character_level, enemy_level)
    }

    /// Non-crit damage against an enemy with explicit resistance inputs
    pub fn get_move_dmg_with(
        &self,
        mv: &Move,
        character_level: u32,
        enemy_level: u32,
        modifiers: &ResistanceModifiers,
        constants: &DamageConstants,
    ) -> f64 {
        self.get_move_base_dmg(mv)
            * self.get_enemy_resistance_with(character_level, enemy_level, modifiers, constants)
    }

    /// Crit damage against an enemy with explicit resistance inputs
    pub fn get_move_dmg_crit_with(
        &self,
        mv: &Move,
        character_level: u32,
        enemy_level: u32,
        modifiers: &ResistanceModifiers,
        constants: &DamageConstants,
    ) -> f64 {
        self.get_move_base_dmg_crit(mv)
            * self.get_enemy_resistance_with(character_level, enemy_level, modifiers, constants)
    }

    /// Expected damage against an enemy with explicit resistance inputs
    pub fn get_move_dmg_avg_with(
        &self,
        mv: &Move,
        character_level: u32,
        enemy_level: u32,
        modifiers: &ResistanceModifiers,
        constants: &DamageConstants,
    ) -> f64 {
        self.get_move_base_dmg_avg(mv)
            * self.get_enemy_resistance_with(character_level, enemy_level, modifiers, constants)
    }

    /// Evaluate one hit, rolling crit against `crit_rate`
    pub fn roll_move_dmg(
        &self,
        mv: &Move,
        character_level: u32,
        enemy_level: u32,
        rng: &mut impl Rng,
    ) -> DamageRoll {
        let is_critical = rng.gen::<f64>() < self.crit_rate;
        let amount = if is_critical {
            self.get_move_dmg_crit(mv, character_level, enemy_level)
        } else {
            self.get_move_dmg(mv, character_level, enemy_level)
        };
        DamageRoll { amount, is_critical }
    }
}
