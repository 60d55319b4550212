//! Shard Seeder Library
//!
//! World generation and idempotent seeding for the shard database:
//! - Fixed bootstrap records (server config, god account, sample roster)
//! - Procedural towns, accounts and characters with stats from `shard_core`
//! - PostgreSQL and in-memory `WorldStore` backends
//! - Character profile lookup for the lookup site

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod names;
pub mod profile;
pub mod records;
pub mod seeder;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigError, SeederConfig};
pub use error::{SeedError, SeedResult};
pub use generator::{GeneratorContext, IdCounter};
pub use profile::{character_profile, CharacterProfile};
pub use records::{AccountRecord, CharacterRecord, EntityKind, ServerConfigEntry, TownRecord};
pub use seeder::{seed_world, SeedReport};
pub use storage::{MemoryStore, PgWorldStore, PostgresStore, StoreError, WorldStore};
