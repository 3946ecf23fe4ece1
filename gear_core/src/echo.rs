//! Echo - an equippable bundle of stats

use crate::types::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of echo slots on a character
pub const ECHO_SLOTS: usize = 5;

/// An echo: one main stat, one secondary stat and any number of substats
///
/// The whole bundle is applied and removed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    /// Loadout cost (informational; the aggregator ignores it)
    pub cost: u32,
    pub main_stat: Stat,
    pub secondary_stat: Stat,
    #[serde(default)]
    pub substats: Vec<Stat>,
}

impl Echo {
    pub fn new(cost: u32, main_stat: Stat, secondary_stat: Stat) -> Self {
        Echo {
            cost,
            main_stat,
            secondary_stat,
            substats: Vec::new(),
        }
    }

    /// Builder: append a substat
    pub fn with_substat(mut self, substat: Stat) -> Self {
        self.substats.push(substat);
        self
    }

    /// Every stat this echo grants, main stat first
    pub fn stats(&self) -> impl Iterator<Item = &Stat> {
        std::iter::once(&self.main_stat)
            .chain(std::iter::once(&self.secondary_stat))
            .chain(self.substats.iter())
    }
}

impl fmt::Display for Echo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Echo (cost {})", self.cost)?;
        writeln!(f, "  {}", self.main_stat)?;
        writeln!(f, "  {}", self.secondary_stat)?;
        for substat in &self.substats {
            writeln!(f, "  - {}", substat)?;
        }
        Ok(())
    }
}
