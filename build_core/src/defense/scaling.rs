//! Level-scaled defense
//!
//! Formula:
//! - char_term = 8 * character_level + 800
//! - enemy_def = 8 * enemy_level + 792
//! - multiplier = char_term / (char_term + enemy_def * (1 - defense_ignore))

use crate::config::DefenseConstants;

/// Attacker-side term of the defense formula
pub fn character_defense_term(character_level: u32, constants: &DefenseConstants) -> f64 {
    constants.character_level_coefficient * character_level as f64 + constants.character_flat
}

/// Enemy defense at a level
pub fn enemy_defense(enemy_level: u32, constants: &DefenseConstants) -> f64 {
    constants.enemy_level_coefficient * enemy_level as f64 + constants.enemy_flat
}

/// Damage multiplier from enemy defense
pub fn defense_multiplier(
    character_level: u32,
    enemy_level: u32,
    defense_ignore: f64,
    constants: &DefenseConstants,
) -> f64 {
    let char_term = character_defense_term(character_level, constants);
    let enemy_def = enemy_defense(enemy_level, constants);
    char_term / (char_term + enemy_def * (1.0 - defense_ignore))
}
