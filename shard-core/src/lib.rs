//! Shard Core - Character stat model
//!
//! This crate provides the deterministic character logic for the shard:
//! - Vocation, sex and group enumerations with validated stored ids
//! - Stat derivation (health, mana, carry capacity, experience)
//! - Default appearance per privilege group
//!
//! No I/O and no state; the seeder and the lookup site both build on it.

pub mod appearance;
pub mod constants;
pub mod error;
pub mod stats;
pub mod vocation;

pub use appearance::Appearance;
pub use error::StatError;
pub use stats::{
    derive_carry_capacity, derive_experience, derive_health, derive_mana, Level, StatBlock,
};
pub use vocation::{GroupId, Sex, VocationClass, VocationFamily};
