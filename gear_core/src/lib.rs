//! gear_core - Data shapes for character builds
//!
//! - `Stat` / `StatType`: one additive modifier and the closed set of kinds
//! - `StackableStat`: a stat with a stack-count range
//! - `Echo`, `Weapon`: equippable stat bundles
//! - `GearCatalog`: named weapons and echoes loaded from TOML

mod catalog;
pub mod echo;
pub mod types;
pub mod weapon;

pub use catalog::GearCatalog;
pub use echo::{Echo, ECHO_SLOTS};
pub use types::{Element, Move, MoveType, StackableStat, Stat, StatType};
pub use weapon::Weapon;

use std::path::PathBuf;
use thiserror::Error;

/// Error loading gear definitions
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error in '{path:?}': {message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },
}
