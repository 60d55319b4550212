//! PostgreSQL Repository Adapter
//!
//! Implements `WorldStore` using PostgresStore as the backend. Converts
//! between SQL row types and world records.

use async_trait::async_trait;
use std::sync::Arc;

use shard_core::{Appearance, GroupId, Level, Sex, StatBlock, StatError, VocationClass};

use super::postgres::{AccountRow, IdTable, PlayerRow, PostgresError, PostgresStore, TownRow};
use super::repository::*;
use crate::records::*;

// ============================================================================
// Type Conversion Helpers
// ============================================================================

fn table_for(kind: EntityKind) -> IdTable {
    match kind {
        EntityKind::Account => IdTable::Accounts,
        EntityKind::Town => IdTable::Towns,
        EntityKind::Character => IdTable::Players,
    }
}

fn account_to_row(account: &AccountRecord) -> AccountRow {
    AccountRow {
        id: account.id,
        name: account.name.clone(),
        password: account.password.clone(),
        email: account.email.clone(),
        account_type: account.account_type,
    }
}

fn character_to_row(c: &CharacterRecord) -> PlayerRow {
    PlayerRow {
        id: c.id,
        name: c.name.clone(),
        group_id: c.group.id(),
        account_id: c.account_id,
        level: c.level.get() as i32,
        vocation: c.vocation.id(),
        health: c.stats.health as i32,
        healthmax: c.stats.health_max as i32,
        experience: c.stats.experience as i64,
        lookbody: c.appearance.look_body as i32,
        lookfeet: c.appearance.look_feet as i32,
        lookhead: c.appearance.look_head as i32,
        looklegs: c.appearance.look_legs as i32,
        looktype: c.appearance.look_type as i32,
        mana: c.stats.mana as i32,
        manamax: c.stats.mana_max as i32,
        town_id: c.town_id,
        conditions: c.conditions.clone(),
        cap: c.stats.carry_capacity as i32,
        sex: c.sex.id(),
        lastlogin: c.last_login,
    }
}

/// Numeric column that must fit `T`; the game server writes these rows too
fn column<T, V>(id: i64, name: &'static str, value: V) -> RepoResult<T>
where
    V: Copy + Into<i64>,
    T: TryFrom<V>,
{
    T::try_from(value).map_err(|_| StoreError::ColumnOutOfRange {
        kind: EntityKind::Character,
        id,
        column: name,
        value: value.into(),
    })
}

/// Rows come from the game server too, so every field is validated on the way in
fn row_to_character(row: PlayerRow) -> RepoResult<CharacterRecord> {
    let id = row.id;
    let corrupt = |source: StatError| StoreError::Corrupt {
        kind: EntityKind::Character,
        id,
        source,
    };
    let level = Level::try_from(row.level as i64).map_err(corrupt)?;
    let vocation = VocationClass::try_from(row.vocation).map_err(corrupt)?;
    let sex = Sex::try_from(row.sex).map_err(corrupt)?;
    let group = GroupId::try_from(row.group_id).map_err(corrupt)?;

    let stats = StatBlock {
        health: column(id, "health", row.health)?,
        health_max: column(id, "healthmax", row.healthmax)?,
        mana: column(id, "mana", row.mana)?,
        mana_max: column(id, "manamax", row.manamax)?,
        carry_capacity: column(id, "cap", row.cap)?,
        experience: column(id, "experience", row.experience)?,
    };
    let appearance = Appearance {
        look_body: column(id, "lookbody", row.lookbody)?,
        look_feet: column(id, "lookfeet", row.lookfeet)?,
        look_head: column(id, "lookhead", row.lookhead)?,
        look_legs: column(id, "looklegs", row.looklegs)?,
        look_type: column(id, "looktype", row.looktype)?,
    };

    Ok(CharacterRecord {
        id: row.id,
        name: row.name,
        level,
        vocation,
        sex,
        group,
        account_id: row.account_id,
        town_id: row.town_id,
        stats,
        appearance,
        conditions: row.conditions,
        last_login: row.lastlogin,
    })
}

fn lift(err: PostgresError) -> StoreError {
    match err {
        PostgresError::Constraint(msg) => StoreError::Constraint(msg),
        other => StoreError::Postgres(other),
    }
}

// ============================================================================
// WorldStore Adapter
// ============================================================================

pub struct PgWorldStore {
    store: Arc<PostgresStore>,
}

impl PgWorldStore {
    pub fn new(store: Arc<PostgresStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorldStore for PgWorldStore {
    async fn max_id(&self, kind: EntityKind) -> RepoResult<Option<i64>> {
        self.store.max_id(table_for(kind)).await.map_err(lift)
    }

    async fn find_id_by_name(&self, kind: EntityKind, name: &str) -> RepoResult<Option<i64>> {
        self.store
            .find_id_by_name(table_for(kind), name)
            .await
            .map_err(lift)
    }

    async fn character_by_name(&self, name: &str) -> RepoResult<Option<CharacterRecord>> {
        let row = self.store.get_player_by_name(name).await.map_err(lift)?;
        row.map(row_to_character).transpose()
    }

    async fn town(&self, id: i64) -> RepoResult<Option<TownRecord>> {
        let row = self.store.get_town(id).await.map_err(lift)?;
        Ok(row.map(|r| TownRecord {
            id: r.id,
            name: r.name,
        }))
    }

    async fn town_ids(&self) -> RepoResult<Vec<i64>> {
        self.store.town_ids().await.map_err(lift)
    }

    async fn account_ids_by_email_domain(&self, domain: &str) -> RepoResult<Vec<i64>> {
        self.store
            .account_ids_by_email_domain(domain)
            .await
            .map_err(lift)
    }

    async fn character_count(&self, account_id: i64) -> RepoResult<u32> {
        let count = self
            .store
            .count_players_for_account(account_id)
            .await
            .map_err(lift)?;
        Ok(count as u32)
    }

    async fn upsert_server_config(&self, entry: &ServerConfigEntry) -> RepoResult<()> {
        self.store
            .upsert_server_config(&entry.config, &entry.value)
            .await
            .map_err(lift)
    }

    async fn upsert_account(&self, account: &AccountRecord) -> RepoResult<()> {
        self.store
            .upsert_account(&account_to_row(account))
            .await
            .map_err(lift)
    }

    async fn upsert_town(&self, town: &TownRecord) -> RepoResult<()> {
        self.store
            .upsert_town(&TownRow {
                id: town.id,
                name: town.name.clone(),
            })
            .await
            .map_err(lift)
    }

    async fn upsert_character(&self, character: &CharacterRecord) -> RepoResult<()> {
        self.store
            .upsert_player(&character_to_row(character))
            .await
            .map_err(lift)
    }
}
