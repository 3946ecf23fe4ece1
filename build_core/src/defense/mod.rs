//! Defense system - enemy resistance and level-scaled defense

mod resistance;
mod scaling;

pub use resistance::{effective_resistance, resistance_multiplier};
pub use scaling::{character_defense_term, defense_multiplier, enemy_defense};

use crate::config::DamageConstants;
use serde::{Deserialize, Serialize};

/// Inputs to the enemy resistance factor that future stat sources may supply
///
/// `Default` is neutral: the factor then depends only on levels and the
/// enemy's base resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceModifiers {
    /// Signed shift added to the enemy's base resistance
    ///
    /// Penetration is supplied as a negative value.
    #[serde(default)]
    pub res_penetration: f64,
    /// Extra multiplier from the enemy's own elemental resistance
    #[serde(default = "neutral_multiplier")]
    pub elemental_resistance: f64,
    /// Generic damage-reduction multiplier
    #[serde(default = "neutral_multiplier")]
    pub damage_reduction: f64,
    /// Fraction of enemy defense ignored (0.0..=1.0)
    #[serde(default)]
    pub defense_ignore: f64,
}

impl Default for ResistanceModifiers {
    fn default() -> Self {
        ResistanceModifiers {
            res_penetration: 0.0,
            elemental_resistance: 1.0,
            damage_reduction: 1.0,
            defense_ignore: 0.0,
        }
    }
}

fn neutral_multiplier() -> f64 {
    1.0
}

/// Combined multiplier applied to base damage against an enemy
///
/// `resistance * elemental_resistance * damage_reduction * defense`
pub fn enemy_resistance_factor(
    character_level: u32,
    enemy_level: u32,
    modifiers: &ResistanceModifiers,
    constants: &DamageConstants,
) -> f64 {
    let res_total = effective_resistance(modifiers.res_penetration, &constants.resistance);
    let res_mult = resistance_multiplier(res_total, &constants.resistance);
    let def_mult = defense_multiplier(
        character_level,
        enemy_level,
        modifiers.defense_ignore,
        &constants.defense,
    );

    res_mult * modifiers.elemental_resistance * modifiers.damage_reduction * def_mult
}
