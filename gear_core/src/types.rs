use serde::{Deserialize, Serialize};
use std::fmt;

/// Elemental damage channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Glacio,
    Fusion,
    Electro,
    Aero,
    Spectro,
    Havoc,
}

impl Element {
    /// Number of elemental channels
    pub const COUNT: usize = 6;

    /// Get all elements in channel order
    pub fn all() -> &'static [Element] {
        &[
            Element::Glacio,
            Element::Fusion,
            Element::Electro,
            Element::Aero,
            Element::Spectro,
            Element::Havoc,
        ]
    }

    /// Slot of this element in a per-element bonus array
    pub fn index(self) -> usize {
        self as usize
    }

    /// The damage-bonus stat that feeds this element
    pub fn dmg_stat(self) -> StatType {
        match self {
            Element::Glacio => StatType::GlacioDmg,
            Element::Fusion => StatType::FusionDmg,
            Element::Electro => StatType::ElectroDmg,
            Element::Aero => StatType::AeroDmg,
            Element::Spectro => StatType::SpectroDmg,
            Element::Havoc => StatType::HavocDmg,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Glacio => write!(f, "Glacio"),
            Element::Fusion => write!(f, "Fusion"),
            Element::Electro => write!(f, "Electro"),
            Element::Aero => write!(f, "Aero"),
            Element::Spectro => write!(f, "Spectro"),
            Element::Havoc => write!(f, "Havoc"),
        }
    }
}

/// Move categories that receive their own damage bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    Skill,
    Basic,
    Heavy,
    Liberation,
}

impl MoveType {
    /// Number of move-type channels
    pub const COUNT: usize = 4;

    /// Get all move types in channel order
    pub fn all() -> &'static [MoveType] {
        &[
            MoveType::Skill,
            MoveType::Basic,
            MoveType::Heavy,
            MoveType::Liberation,
        ]
    }

    /// Slot of this move type in a per-move bonus array
    pub fn index(self) -> usize {
        self as usize
    }

    /// The damage-bonus stat that feeds this move type
    pub fn dmg_stat(self) -> StatType {
        match self {
            MoveType::Skill => StatType::SkillDmg,
            MoveType::Basic => StatType::BasicDmg,
            MoveType::Heavy => StatType::HeavyDmg,
            MoveType::Liberation => StatType::LiberationDmg,
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveType::Skill => write!(f, "Resonance Skill"),
            MoveType::Basic => write!(f, "Basic Attack"),
            MoveType::Heavy => write!(f, "Heavy Attack"),
            MoveType::Liberation => write!(f, "Resonance Liberation"),
        }
    }
}

/// Every modifier kind a stat source can grant
///
/// The set is closed: the aggregator matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    // Base values
    BaseAtk,
    BaseHp,
    BaseDef,
    // Flat additions
    AtkFlat,
    HpFlat,
    DefFlat,
    // Percentage increases (as decimal, 0.12 = 12%)
    AtkPercent,
    HpPercent,
    DefPercent,
    // Combat meta
    CritRate,
    CritDmg,
    EnergyRecharge,
    HealingBonus,
    // Elemental damage bonus
    GlacioDmg,
    FusionDmg,
    ElectroDmg,
    AeroDmg,
    SpectroDmg,
    HavocDmg,
    // Move-type damage bonus
    SkillDmg,
    BasicDmg,
    HeavyDmg,
    LiberationDmg,
}

impl StatType {
    /// The element this stat boosts, if it is an elemental bonus
    pub fn element(self) -> Option<Element> {
        match self {
            StatType::GlacioDmg => Some(Element::Glacio),
            StatType::FusionDmg => Some(Element::Fusion),
            StatType::ElectroDmg => Some(Element::Electro),
            StatType::AeroDmg => Some(Element::Aero),
            StatType::SpectroDmg => Some(Element::Spectro),
            StatType::HavocDmg => Some(Element::Havoc),
            _ => None,
        }
    }

    /// The move type this stat boosts, if it is a move-type bonus
    pub fn move_type(self) -> Option<MoveType> {
        match self {
            StatType::SkillDmg => Some(MoveType::Skill),
            StatType::BasicDmg => Some(MoveType::Basic),
            StatType::HeavyDmg => Some(MoveType::Heavy),
            StatType::LiberationDmg => Some(MoveType::Liberation),
            _ => None,
        }
    }

    /// Whether values of this stat are fractions rather than raw numbers
    pub fn is_percentage(self) -> bool {
        !matches!(
            self,
            StatType::BaseAtk
                | StatType::BaseHp
                | StatType::BaseDef
                | StatType::AtkFlat
                | StatType::HpFlat
                | StatType::DefFlat
        )
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatType::BaseAtk => "Base ATK",
            StatType::BaseHp => "Base HP",
            StatType::BaseDef => "Base DEF",
            StatType::AtkFlat => "ATK",
            StatType::HpFlat => "HP",
            StatType::DefFlat => "DEF",
            StatType::AtkPercent => "ATK%",
            StatType::HpPercent => "HP%",
            StatType::DefPercent => "DEF%",
            StatType::CritRate => "Crit. Rate",
            StatType::CritDmg => "Crit. DMG",
            StatType::EnergyRecharge => "Energy Regen",
            StatType::HealingBonus => "Healing Bonus",
            StatType::GlacioDmg => "Glacio DMG Bonus",
            StatType::FusionDmg => "Fusion DMG Bonus",
            StatType::ElectroDmg => "Electro DMG Bonus",
            StatType::AeroDmg => "Aero DMG Bonus",
            StatType::SpectroDmg => "Spectro DMG Bonus",
            StatType::HavocDmg => "Havoc DMG Bonus",
            StatType::SkillDmg => "Resonance Skill DMG Bonus",
            StatType::BasicDmg => "Basic Attack DMG Bonus",
            StatType::HeavyDmg => "Heavy Attack DMG Bonus",
            StatType::LiberationDmg => "Resonance Liberation DMG Bonus",
        };
        write!(f, "{}", name)
    }
}

/// One additive modifier instance
///
/// Values may be negative; a negated stat reverses the original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(rename = "type")]
    pub stat_type: StatType,
    pub value: f64,
}

impl Stat {
    pub fn new(stat_type: StatType, value: f64) -> Self {
        Stat { stat_type, value }
    }

    /// The same stat with its value negated
    pub fn negated(self) -> Self {
        Stat {
            stat_type: self.stat_type,
            value: -self.value,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stat_type.is_percentage() {
            write!(f, "{} {:+.1}%", self.stat_type, self.value * 100.0)
        } else {
            write!(f, "{} {:+}", self.stat_type, self.value)
        }
    }
}

/// A stat a source can apply between `min_stacks` and `max_stacks` times
///
/// The live contribution is `stat.value * current_stacks`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackableStat {
    pub stat: Stat,
    #[serde(default)]
    pub min_stacks: u32,
    pub max_stacks: u32,
}

impl StackableStat {
    pub fn new(stat: Stat, min_stacks: u32, max_stacks: u32) -> Self {
        StackableStat {
            stat,
            min_stacks,
            max_stacks,
        }
    }

    /// Clamp a stack count into `[min_stacks, max_stacks]`
    pub fn clamp_stacks(&self, stacks: u32) -> u32 {
        stacks.clamp(self.min_stacks, self.max_stacks.max(self.min_stacks))
    }

    /// Whether the declared range is well formed
    pub fn is_valid(&self) -> bool {
        self.min_stacks <= self.max_stacks
    }
}

/// A move a character can perform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub element: Element,
    pub move_type: MoveType,
    /// Fraction of ATK dealt by one hit (0.5007 = 50.07%)
    pub multiplier: f64,
}

impl Move {
    pub fn new(element: Element, move_type: MoveType, multiplier: f64) -> Self {
        Move {
            element,
            move_type,
            multiplier,
        }
    }
}
