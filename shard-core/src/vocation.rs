//! Vocations, sexes and privilege groups.
//!
//! All three are stored as small integers. Conversions from the stored id go
//! through `TryFrom<i32>` so an id outside the table is rejected instead of
//! silently mapping to nothing.

use serde::{Deserialize, Serialize};

use crate::error::StatError;

/// Character profession tier. The discriminant is the stored id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(u8)]
pub enum VocationClass {
    None = 0,
    Sorcerer = 1,
    Druid = 2,
    Paladin = 3,
    Knight = 4,
    MasterSorcerer = 5,
    ElderDruid = 6,
    RoyalPaladin = 7,
    EliteKnight = 8,
}

/// Growth-rule family shared by a base vocation and its promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VocationFamily {
    None,
    Sorcerer,
    Druid,
    Paladin,
    Knight,
}

/// Stored id order; `VOCATIONS[v as usize] == v` for every vocation.
pub const VOCATIONS: [VocationClass; 9] = [
    VocationClass::None,
    VocationClass::Sorcerer,
    VocationClass::Druid,
    VocationClass::Paladin,
    VocationClass::Knight,
    VocationClass::MasterSorcerer,
    VocationClass::ElderDruid,
    VocationClass::RoyalPaladin,
    VocationClass::EliteKnight,
];

const VOCATION_NAMES: [&str; 9] = [
    "None",
    "Sorcerer",
    "Druid",
    "Paladin",
    "Knight",
    "Master Sorcerer",
    "Elder Druid",
    "Royal Paladin",
    "Elite Knight",
];

impl VocationClass {
    /// Unpromoted vocations, in stored id order
    pub const BASE_TIERS: [VocationClass; 5] = [
        VocationClass::None,
        VocationClass::Sorcerer,
        VocationClass::Druid,
        VocationClass::Paladin,
        VocationClass::Knight,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    /// Display name as shown on the character page
    pub fn name(self) -> &'static str {
        VOCATION_NAMES[self as usize]
    }

    pub fn family(self) -> VocationFamily {
        match self {
            Self::None => VocationFamily::None,
            Self::Sorcerer | Self::MasterSorcerer => VocationFamily::Sorcerer,
            Self::Druid | Self::ElderDruid => VocationFamily::Druid,
            Self::Paladin | Self::RoyalPaladin => VocationFamily::Paladin,
            Self::Knight | Self::EliteKnight => VocationFamily::Knight,
        }
    }

    pub fn is_promoted(self) -> bool {
        matches!(
            self,
            Self::MasterSorcerer | Self::ElderDruid | Self::RoyalPaladin | Self::EliteKnight
        )
    }

    /// The unpromoted tier of this vocation's family
    pub fn base(self) -> Self {
        match self.family() {
            VocationFamily::None => Self::None,
            VocationFamily::Sorcerer => Self::Sorcerer,
            VocationFamily::Druid => Self::Druid,
            VocationFamily::Paladin => Self::Paladin,
            VocationFamily::Knight => Self::Knight,
        }
    }

    /// The promoted tier, or `None` for vocationless characters
    pub fn promoted(self) -> Option<Self> {
        match self.family() {
            VocationFamily::None => None,
            VocationFamily::Sorcerer => Some(Self::MasterSorcerer),
            VocationFamily::Druid => Some(Self::ElderDruid),
            VocationFamily::Paladin => Some(Self::RoyalPaladin),
            VocationFamily::Knight => Some(Self::EliteKnight),
        }
    }

    pub fn all() -> &'static [VocationClass] {
        &VOCATIONS
    }
}

impl TryFrom<i32> for VocationClass {
    type Error = StatError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| VOCATIONS.get(idx).copied())
            .ok_or(StatError::UnknownVocation(id))
    }
}

impl From<VocationClass> for i32 {
    fn from(v: VocationClass) -> Self {
        v.id()
    }
}

impl std::fmt::Display for VocationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Sex
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(u8)]
pub enum Sex {
    Female = 0,
    Male = 1,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

impl TryFrom<i32> for Sex {
    type Error = StatError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Female),
            1 => Ok(Self::Male),
            other => Err(StatError::UnknownSex(other)),
        }
    }
}

impl From<Sex> for i32 {
    fn from(s: Sex) -> Self {
        s.id()
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Privilege group
// ============================================================================

/// Privilege tier. Only the outfit depends on it, never the stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum GroupId {
    Player = 1,
    God = 6,
}

impl GroupId {
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for GroupId {
    type Error = StatError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Player),
            6 => Ok(Self::God),
            other => Err(StatError::UnknownGroup(other)),
        }
    }
}

impl From<GroupId> for i32 {
    fn from(g: GroupId) -> Self {
        g.id()
    }
}
