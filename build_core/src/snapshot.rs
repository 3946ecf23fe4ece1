//! Build snapshots - persisting the aggregation result itself
//!
//! A snapshot holds the stat block and extra-stat map as plain data, so a
//! build can be restored without replaying its equipment history.

use crate::character::{Character, ExtraStat};
use crate::stats::CharacterStats;
use crate::SnapshotError;
use gear_core::{Echo, Weapon, ECHO_SLOTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plain-data copy of a character's aggregated state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    pub stats: CharacterStats,
    #[serde(default)]
    pub extra_stats: BTreeMap<String, ExtraStat>,
}

impl BuildSnapshot {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Character {
    /// Capture the current stat block and extra stats
    pub fn snapshot(&self) -> BuildSnapshot {
        BuildSnapshot {
            stats: self.stats.clone(),
            extra_stats: self.extra_stats.clone(),
        }
    }

    /// Rebuild a character from a snapshot
    ///
    /// The snapshot is trusted as-is: `weapon` and `echoes` must be the
    /// equipment it was taken with, or later unequips will reverse stats
    /// that were never applied.
    pub fn restore(
        snapshot: BuildSnapshot,
        weapon: Weapon,
        echoes: [Option<Echo>; ECHO_SLOTS],
    ) -> Self {
        Character {
            stats: snapshot.stats,
            echoes,
            weapon,
            extra_stats: snapshot.extra_stats,
        }
    }
}
