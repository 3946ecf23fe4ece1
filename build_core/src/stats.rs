//! CharacterStats - the aggregate of every applied modifier
//!
//! Every field is the plain sum of the modifiers currently applied to it,
//! so applying the same multiset of stats in any order gives the same block
//! and `remove_stat` exactly reverses `add_stat`.

use gear_core::{Echo, Element, MoveType, Stat, StatType};
use serde::{Deserialize, Serialize};

/// Innate crit rate of every character
pub const BASE_CRIT_RATE: f64 = 0.05;
/// Innate crit damage multiplier of every character
pub const BASE_CRIT_DMG: f64 = 1.5;

/// A character's level-dependent base values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub atk: f64,
    pub hp: f64,
    pub def: f64,
}

impl BaseStats {
    pub fn new(atk: f64, hp: f64, def: f64) -> Self {
        BaseStats { atk, hp, def }
    }
}

/// Aggregated stats of one character build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    // === Base values ===
    pub base_atk: f64,
    pub base_hp: f64,
    pub base_def: f64,

    // === Flat additions ===
    pub atk_flat: f64,
    pub hp_flat: f64,
    pub def_flat: f64,

    // === Percentage increases ===
    pub atk_percent: f64,
    pub hp_percent: f64,
    pub def_percent: f64,

    // === Combat meta ===
    /// Probability in [0, 1] by convention; not clamped
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub energy_recharge: f64,
    pub healing_bonus: f64,

    // === Damage bonuses ===
    /// Indexed by `Element::index`
    pub element_dmg: [f64; Element::COUNT],
    /// Indexed by `MoveType::index`
    pub move_dmg: [f64; MoveType::COUNT],
}

impl CharacterStats {
    /// Create a block holding only base values and innate crit stats
    pub fn new(base: BaseStats) -> Self {
        CharacterStats {
            base_atk: base.atk,
            base_hp: base.hp,
            base_def: base.def,
            atk_flat: 0.0,
            hp_flat: 0.0,
            def_flat: 0.0,
            atk_percent: 0.0,
            hp_percent: 0.0,
            def_percent: 0.0,
            crit_rate: BASE_CRIT_RATE,
            crit_dmg: BASE_CRIT_DMG,
            energy_recharge: 0.0,
            healing_bonus: 0.0,
            element_dmg: [0.0; Element::COUNT],
            move_dmg: [0.0; MoveType::COUNT],
        }
    }

    /// Apply one stack of a stat
    pub fn add_stat(&mut self, stat: &Stat) {
        self.add_stat_stacks(stat, 1);
    }

    /// Apply `stacks` stacks of a stat (`value * stacks` is added)
    pub fn add_stat_stacks(&mut self, stat: &Stat, stacks: u32) {
        self.apply(stat.stat_type, stat.value * stacks as f64);
    }

    /// Reverse one stack of a stat
    pub fn remove_stat(&mut self, stat: &Stat) {
        self.remove_stat_stacks(stat, 1);
    }

    /// Reverse `stacks` stacks of a stat
    pub fn remove_stat_stacks(&mut self, stat: &Stat, stacks: u32) {
        self.add_stat_stacks(&stat.negated(), stacks);
    }

    /// Apply every stat of an echo
    pub fn add_echo(&mut self, echo: &Echo) {
        for stat in echo.stats() {
            self.add_stat(stat);
        }
    }

    /// Reverse every stat of an echo
    pub fn remove_echo(&mut self, echo: &Echo) {
        for stat in echo.stats() {
            self.remove_stat(stat);
        }
    }

    fn apply(&mut self, stat_type: StatType, amount: f64) {
        match stat_type {
            StatType::BaseAtk => self.base_atk += amount,
            StatType::BaseHp => self.base_hp += amount,
            StatType::BaseDef => self.base_def += amount,

            StatType::AtkFlat => self.atk_flat += amount,
            StatType::HpFlat => self.hp_flat += amount,
            StatType::DefFlat => self.def_flat += amount,

            StatType::AtkPercent => self.atk_percent += amount,
            StatType::HpPercent => self.hp_percent += amount,
            StatType::DefPercent => self.def_percent += amount,

            StatType::CritRate => self.crit_rate += amount,
            StatType::CritDmg => self.crit_dmg += amount,
            StatType::EnergyRecharge => self.energy_recharge += amount,
            StatType::HealingBonus => self.healing_bonus += amount,

            StatType::GlacioDmg => self.element_dmg[Element::Glacio.index()] += amount,
            StatType::FusionDmg => self.element_dmg[Element::Fusion.index()] += amount,
            StatType::ElectroDmg => self.element_dmg[Element::Electro.index()] += amount,
            StatType::AeroDmg => self.element_dmg[Element::Aero.index()] += amount,
            StatType::SpectroDmg => self.element_dmg[Element::Spectro.index()] += amount,
            StatType::HavocDmg => self.element_dmg[Element::Havoc.index()] += amount,

            StatType::SkillDmg => self.move_dmg[MoveType::Skill.index()] += amount,
            StatType::BasicDmg => self.move_dmg[MoveType::Basic.index()] += amount,
            StatType::HeavyDmg => self.move_dmg[MoveType::Heavy.index()] += amount,
            StatType::LiberationDmg => self.move_dmg[MoveType::Liberation.index()] += amount,
        }
    }

    /// Final ATK: `base * (1 + percent) + flat`
    pub fn get_atk(&self) -> f64 {
        self.base_atk * (1.0 + self.atk_percent) + self.atk_flat
    }

    /// Final HP: `base * (1 + percent) + flat`
    pub fn get_hp(&self) -> f64 {
        self.base_hp * (1.0 + self.hp_percent) + self.hp_flat
    }

    /// Final DEF: `base * (1 + percent) + flat`
    pub fn get_def(&self) -> f64 {
        self.base_def * (1.0 + self.def_percent) + self.def_flat
    }

    /// Damage bonus for an element
    pub fn element_dmg(&self, element: Element) -> f64 {
        self.element_dmg[element.index()]
    }

    /// Damage bonus for a move type
    pub fn move_dmg(&self, move_type: MoveType) -> f64 {
        self.move_dmg[move_type.index()]
    }
}
