//! Damage system - move damage from aggregated stats
//!
//! Three flavours per move: non-crit, always-crit and crit-weighted
//! average. The `get_move_dmg*` family additionally applies the enemy
//! resistance factor for a character/enemy level pair.

mod calculation;

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single hit with a rolled crit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Final damage after enemy resistance
    pub amount: f64,
    pub is_critical: bool,
}
