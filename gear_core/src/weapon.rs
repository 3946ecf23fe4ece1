//! Weapon - base attack, a secondary stat and named stackable passives

use crate::types::{StackableStat, Stat, StatType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An equippable weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Contribution to the character's base attack
    pub atk: f64,
    pub secondary_stat: Stat,
    /// Passive bonuses keyed by a name unique to this weapon
    #[serde(default)]
    pub passive_stats: BTreeMap<String, StackableStat>,
}

impl Weapon {
    pub fn new(atk: f64, secondary_stat: Stat) -> Self {
        Weapon {
            atk,
            secondary_stat,
            passive_stats: BTreeMap::new(),
        }
    }

    /// A weapon that contributes nothing
    ///
    /// Equipping over this removes zero from every field.
    pub fn unarmed() -> Self {
        Weapon::new(0.0, Stat::new(StatType::BaseAtk, 0.0))
    }

    /// Builder: add a named passive
    pub fn with_passive(mut self, key: impl Into<String>, passive: StackableStat) -> Self {
        self.passive_stats.insert(key.into(), passive);
        self
    }

    /// Look up a passive by name
    pub fn passive(&self, key: &str) -> Option<&StackableStat> {
        self.passive_stats.get(key)
    }

    /// The base-attack contribution as a stat
    pub fn atk_stat(&self) -> Stat {
        Stat::new(StatType::BaseAtk, self.atk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_is_zero() {
        let weapon = Weapon::unarmed();
        assert_eq!(weapon.atk, 0.0);
        assert_eq!(weapon.secondary_stat.value, 0.0);
        assert!(weapon.passive_stats.is_empty());
    }

    #[test]
    fn test_passive_lookup() {
        let weapon = Weapon::new(445.0, Stat::new(StatType::CritDmg, 0.401)).with_passive(
            "heavy_bonus",
            StackableStat::new(Stat::new(StatType::HeavyDmg, 0.24), 0, 2),
        );
        assert_eq!(weapon.passive("heavy_bonus").map(|p| p.max_stacks), Some(2));
        assert!(weapon.passive("missing").is_none());
        assert_eq!(weapon.atk_stat().stat_type, StatType::BaseAtk);
    }
}
