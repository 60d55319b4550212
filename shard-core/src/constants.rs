//! Centralized stat-model constants for the shard core.
//!
//! Every growth rule in [`crate::stats`] reads its numbers from here so the
//! formulas and the tests pinning them share a single source of truth.

// =====================================================
// Levels
// =====================================================

/// Lowest level a character can have
pub const MIN_LEVEL: u32 = 1;

/// Highest level accepted by [`crate::Level::new`].
///
/// Experience at this level still fits a signed 64-bit store column.
pub const MAX_LEVEL: u32 = 100_000;

/// Vocation bonuses start applying from this level onward
pub const BONUS_START_LEVEL: u32 = 9;

/// Bonus multipliers are applied to `level - BONUS_BASE_LEVEL`
pub const BONUS_BASE_LEVEL: u32 = 8;

// =====================================================
// Health
// =====================================================

/// Health at level 1
pub const HEALTH_BASE: u32 = 145;

/// Health gained per level by every vocation
pub const HEALTH_PER_LEVEL: u32 = 5;

/// Extra health per level past 8 for the knight family
pub const KNIGHT_HEALTH_BONUS: u32 = 15;

/// Extra health per level past 8 for the paladin family
pub const PALADIN_HEALTH_BONUS: u32 = 10;

// =====================================================
// Mana
// =====================================================

/// Mana at level 1
pub const MANA_BASE: u32 = 50;

/// Mana gained per level by every vocation
pub const MANA_PER_LEVEL: u32 = 5;

/// Extra mana per level past 8 for sorcerers and druids (and promotions)
pub const CASTER_MANA_BONUS: u32 = 30;

/// Extra mana per level past 8 for the paladin family
pub const PALADIN_MANA_BONUS: u32 = 15;

// =====================================================
// Carry capacity
// =====================================================

/// Capacity at level 1
pub const CAPACITY_BASE: u32 = 400;

/// Capacity gained per level by every vocation
pub const CAPACITY_PER_LEVEL: u32 = 10;

/// Extra capacity per level past 8, base `Paladin` only
pub const PALADIN_CAPACITY_BONUS: u32 = 20;

/// Extra capacity per level past 8, base `Knight` only
pub const KNIGHT_CAPACITY_BONUS: u32 = 25;

// =====================================================
// Experience curve: 50/3 * (L^3 - 6L^2 + 17L - 12)
// =====================================================

pub const EXPERIENCE_NUMERATOR: u128 = 50;
pub const EXPERIENCE_DENOMINATOR: u128 = 3;

// =====================================================
// Appearance
// =====================================================

pub const LOOK_BODY: u16 = 113;
pub const LOOK_FEET: u16 = 115;
pub const LOOK_HEAD: u16 = 95;
pub const LOOK_LEGS: u16 = 39;

/// Outfit used by regular players
pub const LOOK_TYPE_PLAYER: u16 = 129;

/// Outfit used by gamemasters in the god group
pub const LOOK_TYPE_GOD: u16 = 75;
