//! Storage Layer - persistence for the shard world
//!
//! Implements the Repository pattern over two interchangeable backends:
//! - **PostgreSQL**: the game server's database (accounts, players, towns, server config)
//! - **Memory**: in-process tables for tests and dry runs
//!
//! ## Architecture
//! ```text
//! [Seeder / Profile lookup]
//!       ↓
//! [WorldStore trait]
//!       ↓
//! ┌──────────────────┬──────────────┐
//! │ PgWorldStore     │ MemoryStore  │
//! │ (PostgresStore)  │ (BTreeMaps)  │
//! └──────────────────┴──────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let (pg, world) = storage::connect("postgres://...", 5).await?;
//! seeder::seed_world(&world, &config).await?;
//! pg.close().await;
//! ```

pub mod memory;
pub mod migrations;
pub mod postgres;
pub mod postgres_repo_adapter;
pub mod repository;
pub mod seed_data;

use std::sync::Arc;
use tracing::info;

pub use self::memory::MemoryStore;
pub use self::postgres::{PostgresError, PostgresStore};
pub use self::postgres_repo_adapter::PgWorldStore;
pub use self::repository::{RepoResult, StoreError, WorldStore};

/// Connect to PostgreSQL, apply migrations and wrap the pool as a `WorldStore`
///
/// The returned `PostgresStore` handle is kept so the caller can close the
/// pool once the run is over.
pub async fn connect(
    postgres_url: &str,
    pg_max_connections: u32,
) -> Result<(Arc<PostgresStore>, PgWorldStore), PostgresError> {
    let pg = Arc::new(PostgresStore::new(postgres_url, pg_max_connections).await?);
    info!("PostgreSQL world store initialized");
    Ok((pg.clone(), PgWorldStore::new(pg)))
}
