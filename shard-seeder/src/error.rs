use shard_core::StatError;
use thiserror::Error;

use crate::records::EntityKind;
use crate::storage::StoreError;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("stat model error: {0}")]
    Stat(#[from] StatError),
    #[error("no unused {kind} name found after {attempts} attempts")]
    NamePoolExhausted { kind: EntityKind, attempts: u32 },
    #[error("invalid seeder config: {0}")]
    InvalidConfig(String),
}
