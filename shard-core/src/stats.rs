//! Character stat derivation.
//!
//! Maps (level, vocation) to health, mana, carry capacity and experience.
//! Every function here is pure and total over [`Level`] × [`VocationClass`];
//! the only failure mode is constructing a `Level` out of range.
//!
//! Growth rules:
//! - every vocation gains a flat amount per level
//! - from level 9, families gain an extra amount per level past 8
//! - the capacity bonus only applies to the *base* `Paladin` and `Knight`,
//!   not to `RoyalPaladin` / `EliteKnight`

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::StatError;
use crate::vocation::{VocationClass, VocationFamily};

/// A validated character level in `MIN_LEVEL..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Level(u32);

impl Level {
    pub const MIN: Level = Level(MIN_LEVEL);
    pub const MAX: Level = Level(MAX_LEVEL);

    pub fn new(level: u32) -> Result<Self, StatError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(StatError::LevelOutOfRange(level as i64))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Levels gained past the bonus threshold, 0 below level 9
    fn bonus_levels(self) -> u32 {
        if self.0 >= BONUS_START_LEVEL {
            self.0 - BONUS_BASE_LEVEL
        } else {
            0
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = StatError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw)
            .map_err(|_| StatError::LevelOutOfRange(raw))
            .and_then(Level::new)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.0 as i64
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Derivation
// ============================================================================

pub fn derive_health(level: Level, vocation: VocationClass) -> u32 {
    let base = HEALTH_BASE + (level.get() - 1) * HEALTH_PER_LEVEL;
    let bonus = match vocation.family() {
        VocationFamily::Knight => KNIGHT_HEALTH_BONUS,
        VocationFamily::Paladin => PALADIN_HEALTH_BONUS,
        _ => 0,
    };
    base + level.bonus_levels() * bonus
}

pub fn derive_mana(level: Level, vocation: VocationClass) -> u32 {
    let base = MANA_BASE + (level.get() - 1) * MANA_PER_LEVEL;
    let bonus = match vocation.family() {
        VocationFamily::Sorcerer | VocationFamily::Druid => CASTER_MANA_BONUS,
        VocationFamily::Paladin => PALADIN_MANA_BONUS,
        VocationFamily::Knight | VocationFamily::None => 0,
    };
    base + level.bonus_levels() * bonus
}

/// Carry capacity (in oz).
///
/// Matches on the exact vocation rather than the family: promoted paladins
/// and knights stay on the base curve.
pub fn derive_carry_capacity(level: Level, vocation: VocationClass) -> u32 {
    let base = CAPACITY_BASE + (level.get() - 1) * CAPACITY_PER_LEVEL;
    let bonus = match vocation {
        VocationClass::Paladin => PALADIN_CAPACITY_BONUS,
        VocationClass::Knight => KNIGHT_CAPACITY_BONUS,
        _ => 0,
    };
    base + level.bonus_levels() * bonus
}

/// Total experience required to reach `level`: `floor(50/3 * (L³ - 6L² + 17L - 12))`.
///
/// The cubic factors as `(L - 1)(L² - 5L + 12)`, which is non-negative for
/// every valid level, so the whole computation stays unsigned.
pub fn derive_experience(level: Level) -> u64 {
    let l = level.get() as u128;
    let cubic = (l - 1) * (l * l + 12 - 5 * l);
    let exp = EXPERIENCE_NUMERATOR * cubic / EXPERIENCE_DENOMINATOR;
    // MAX_LEVEL keeps this well inside u64
    exp as u64
}

/// Full stat block for a freshly created character (resources full)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: u32,
    pub health_max: u32,
    pub mana: u32,
    pub mana_max: u32,
    pub carry_capacity: u32,
    pub experience: u64,
}

impl StatBlock {
    pub fn derive(level: Level, vocation: VocationClass) -> Self {
        let health = derive_health(level, vocation);
        let mana = derive_mana(level, vocation);
        Self {
            health,
            health_max: health,
            mana,
            mana_max: mana,
            carry_capacity: derive_carry_capacity(level, vocation),
            experience: derive_experience(level),
        }
    }

    pub fn is_full(&self) -> bool {
        self.health == self.health_max && self.mana == self.mana_max
    }
}
