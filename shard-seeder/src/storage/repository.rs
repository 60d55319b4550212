//! Repository trait - abstraction layer for world data access
//!
//! The seeder only ever talks to the store through `WorldStore`, so the
//! Postgres backend and the in-memory backend are interchangeable.

use async_trait::async_trait;
use shard_core::StatError;

use super::postgres::PostgresError;
use crate::records::*;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Postgres(#[from] PostgresError),
    #[error("Constraint violation: {0}")]
    Constraint(String),
    #[error("Corrupt {kind} row {id}: {source}")]
    Corrupt {
        kind: EntityKind,
        id: i64,
        #[source]
        source: StatError,
    },
    #[error("Corrupt {kind} row {id}: column {column} holds {value}")]
    ColumnOutOfRange {
        kind: EntityKind,
        id: i64,
        column: &'static str,
        value: i64,
    },
}

// ============================================================================
// World Repository (read-write)
// ============================================================================

/// Persistence surface needed to seed and look up the world
#[async_trait]
pub trait WorldStore: Send + Sync {
    /// Highest id currently stored for `kind`, `None` when the table is empty
    async fn max_id(&self, kind: EntityKind) -> RepoResult<Option<i64>>;

    /// Id of the entity with exactly this name (case-sensitive)
    async fn find_id_by_name(&self, kind: EntityKind, name: &str) -> RepoResult<Option<i64>>;

    async fn character_by_name(&self, name: &str) -> RepoResult<Option<CharacterRecord>>;
    async fn town(&self, id: i64) -> RepoResult<Option<TownRecord>>;
    async fn town_ids(&self) -> RepoResult<Vec<i64>>;
    /// Ids of accounts whose email is `<anything>@domain`, ascending
    async fn account_ids_by_email_domain(&self, domain: &str) -> RepoResult<Vec<i64>>;
    async fn character_count(&self, account_id: i64) -> RepoResult<u32>;

    async fn upsert_server_config(&self, entry: &ServerConfigEntry) -> RepoResult<()>;
    async fn upsert_account(&self, account: &AccountRecord) -> RepoResult<()>;
    async fn upsert_town(&self, town: &TownRecord) -> RepoResult<()>;
    async fn upsert_character(&self, character: &CharacterRecord) -> RepoResult<()>;
}
