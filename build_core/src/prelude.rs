//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, ExtraStat};
pub use crate::stats::{BaseStats, CharacterStats};

// Damage and defense
pub use crate::damage::DamageRoll;
pub use crate::defense::ResistanceModifiers;

// Persistence
pub use crate::snapshot::BuildSnapshot;

// Config
pub use crate::config::{init_constants, init_constants_default, DamageConstants};

// Errors
pub use crate::{CharacterError, ConfigError, SnapshotError};

// Re-exports from gear_core
pub use gear_core::{Echo, Element, Move, MoveType, StackableStat, Stat, StatType, Weapon};
