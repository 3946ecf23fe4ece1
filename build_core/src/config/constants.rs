//! Damage constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::ConfigError;

/// Global damage constants instance
static DAMAGE_CONSTANTS: OnceLock<DamageConstants> = OnceLock::new();

/// Initialize the global damage constants from a TOML file
///
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = DamageConstants::load_from_path(path)?;
    DAMAGE_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Initialize the global damage constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    DAMAGE_CONSTANTS
        .set(DamageConstants::default())
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Get a reference to the global damage constants
///
/// Falls back to (and locks in) the defaults if nothing was initialized.
pub fn constants() -> &'static DamageConstants {
    DAMAGE_CONSTANTS.get_or_init(DamageConstants::default)
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    DAMAGE_CONSTANTS.get().is_some()
}

/// Tunable constants of the enemy resistance and defense formulas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    #[serde(default)]
    pub resistance: ResistanceConstants,
    #[serde(default)]
    pub defense: DefenseConstants,
}

impl DamageConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        super::load_toml(path)
    }

    /// Parse constants from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::parse_toml(content)
    }
}

/// Piecewise elemental resistance curve
///
/// - `res <= low_threshold`: `1 - res / 2`
/// - `res <= high_threshold`: `1 - res`
/// - otherwise: `1 / (1 + high_slope * res)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceConstants {
    /// Enemy resistance before penetration (0.1 = 10%)
    #[serde(default = "default_base_resistance")]
    pub base_resistance: f64,
    #[serde(default = "default_low_threshold")]
    pub low_threshold: f64,
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,
    #[serde(default = "default_high_slope")]
    pub high_slope: f64,
}

impl Default for ResistanceConstants {
    fn default() -> Self {
        ResistanceConstants {
            base_resistance: 0.1,
            low_threshold: 0.0,
            high_threshold: 0.8,
            high_slope: 5.0,
        }
    }
}

fn default_base_resistance() -> f64 {
    0.1
}
fn default_low_threshold() -> f64 {
    0.0
}
fn default_high_threshold() -> f64 {
    0.8
}
fn default_high_slope() -> f64 {
    5.0
}

/// Level-scaled defense: `char / (char + enemy_def * (1 - ignore))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseConstants {
    #[serde(default = "default_level_coefficient")]
    pub character_level_coefficient: f64,
    #[serde(default = "default_character_flat")]
    pub character_flat: f64,
    #[serde(default = "default_level_coefficient")]
    pub enemy_level_coefficient: f64,
    #[serde(default = "default_enemy_flat")]
    pub enemy_flat: f64,
}

impl Default for DefenseConstants {
    fn default() -> Self {
        DefenseConstants {
            character_level_coefficient: 8.0,
            character_flat: 800.0,
            enemy_level_coefficient: 8.0,
            enemy_flat: 792.0,
        }
    }
}

fn default_level_coefficient() -> f64 {
    8.0
}
fn default_character_flat() -> f64 {
    800.0
}
fn default_enemy_flat() -> f64 {
    792.0
}
