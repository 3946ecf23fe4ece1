//! build_core - Stat aggregation and move damage for character builds
//!
//! This library provides:
//! - CharacterStats: the sum of every applied stat, plus move damage
//! - Character: weapon, echo slots and named stacking bonuses
//! - Enemy resistance and defense scaling with tunable constants
//! - BuildSnapshot: persisting an aggregated build
//!
//! # Quick Start
//!
//! ```rust
//! use build_core::prelude::*;
//!
//! let weapon = Weapon::new(445.0, Stat::new(StatType::CritDmg, 0.401));
//! let mut character = Character::new(
//!     BaseStats::new(343.0, 7954.0, 899.0),
//!     weapon,
//!     [None, None, None, None, None],
//! );
//! character.add_extra_stat_stacks("talent", Stat::new(StatType::AtkPercent, 0.018), 2);
//!
//! let slash = Move::new(Element::Aero, MoveType::Basic, 0.5007);
//! let damage = character.stats().get_move_dmg(&slash, 70, 70);
//! assert!(damage > 0.0);
//! ```

pub mod approx;
pub mod character;
pub mod config;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod snapshot;
pub mod stats;

// Core API - what most users need
pub use character::{Character, ExtraStat};
pub use damage::DamageRoll;
pub use defense::ResistanceModifiers;
pub use snapshot::BuildSnapshot;
pub use stats::{BaseStats, CharacterStats};

// Configuration
pub use config::{constants, init_constants, init_constants_default, DamageConstants};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading damage constants
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Damage constants already initialized")]
    AlreadyInitialized,
}

/// A character operation was called outside its contract
#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("Echo slot {0} out of range (slots are 0-4)")]
    InvalidEchoSlot(usize),
    #[error("Equipped weapon has no passive stat '{0}'")]
    UnknownWeaponStat(String),
    #[error("Weapon stat '{key}' has {stacks} stacks, below its minimum of {min}")]
    WeaponStatBelowMin { key: String, stacks: u32, min: u32 },
}

/// Error reading or writing a build snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
