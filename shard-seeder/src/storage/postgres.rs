//! PostgreSQL Storage - world data persistence
//!
//! Uses `sqlx` for async queries against the game server's schema.
//!
//! ## Tables
//! - server_config, accounts, towns, players
//!
//! Every write is an upsert keyed by primary key
//! (`INSERT ... ON CONFLICT (id) DO UPDATE`), so replaying a seed run
//! rewrites rows in place instead of duplicating them.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};

use super::migrations;

/// SQLSTATE for unique_violation / foreign_key_violation
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL connection pool wrapper
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

/// Error type for PostgreSQL operations
#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Split constraint violations out of generic sqlx errors
fn classify(err: sqlx::Error) -> PostgresError {
    if let Some(db) = err.as_database_error() {
        if matches!(db.code().as_deref(), Some(UNIQUE_VIOLATION | FOREIGN_KEY_VIOLATION)) {
            return PostgresError::Constraint(db.message().to_string());
        }
    }
    PostgresError::Sqlx(err)
}

impl PostgresStore {
    /// Connect to PostgreSQL and run migrations
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connected (max_connections={})", max_connections);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Close every pooled connection; waits for checked-out ones to return
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<(), PostgresError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name VARCHAR(100) PRIMARY KEY,
                applied_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
            )",
        )
        .execute(&self.pool)
        .await?;

        for (name, sql) in migrations::get_migrations() {
            let applied: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE name = $1)")
                    .bind(name)
                    .fetch_one(&self.pool)
                    .await?;

            if !applied {
                info!("Running migration: {}", name);
                sqlx::raw_sql(sql)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| PostgresError::Migration(format!("{}: {}", name, e)))?;

                sqlx::query("INSERT INTO _migrations (name) VALUES ($1)")
                    .bind(name)
                    .execute(&self.pool)
                    .await?;

                info!("Migration applied: {}", name);
            } else {
                debug!("Migration already applied: {}", name);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// `MAX(id)` of one of the id-keyed tables
    pub async fn max_id(&self, table: IdTable) -> Result<Option<i64>, PostgresError> {
        let sql = format!("SELECT MAX(id) FROM {}", table.name());
        let max: Option<i64> = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(max)
    }

    pub async fn find_id_by_name(
        &self,
        table: IdTable,
        name: &str,
    ) -> Result<Option<i64>, PostgresError> {
        let sql = format!("SELECT id FROM {} WHERE name = $1", table.name());
        let id: Option<i64> = sqlx::query_scalar(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn get_player_by_name(&self, name: &str) -> Result<Option<PlayerRow>, PostgresError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, group_id, account_id, level, vocation,
                    health, healthmax, experience,
                    lookbody, lookfeet, lookhead, looklegs, looktype,
                    mana, manamax, town_id, conditions, cap, sex, lastlogin
             FROM players WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_town(&self, id: i64) -> Result<Option<TownRow>, PostgresError> {
        let row = sqlx::query_as::<_, TownRow>("SELECT id, name FROM towns WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn town_ids(&self) -> Result<Vec<i64>, PostgresError> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM towns ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    /// Exact suffix match, so `_` and `%` in the domain are not wildcards
    pub async fn account_ids_by_email_domain(
        &self,
        domain: &str,
    ) -> Result<Vec<i64>, PostgresError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT id FROM accounts
             WHERE right(email, length($1) + 1) = '@' || $1
             ORDER BY id",
        )
        .bind(domain)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    pub async fn count_players_for_account(&self, account_id: i64) -> Result<i64, PostgresError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE account_id = $1")
            .bind(account_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ========================================================================
    // Upserts
    // ========================================================================

    pub async fn upsert_server_config(&self, config: &str, value: &str) -> Result<(), PostgresError> {
        sqlx::query(
            "INSERT INTO server_config (config, value) VALUES ($1, $2)
             ON CONFLICT (config) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(config)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        debug!("Upserted server_config {}", config);
        Ok(())
    }

    pub async fn upsert_account(&self, row: &AccountRow) -> Result<(), PostgresError> {
        sqlx::query(
            "INSERT INTO accounts (id, name, password, email, type)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                password = EXCLUDED.password,
                email = EXCLUDED.email,
                type = EXCLUDED.type",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.password)
        .bind(&row.email)
        .bind(row.account_type)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        debug!("Upserted account {} (id={})", row.name, row.id);
        Ok(())
    }

    pub async fn upsert_town(&self, row: &TownRow) -> Result<(), PostgresError> {
        sqlx::query(
            "INSERT INTO towns (id, name) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name",
        )
        .bind(row.id)
        .bind(&row.name)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        debug!("Upserted town {} (id={})", row.name, row.id);
        Ok(())
    }

    pub async fn upsert_player(&self, row: &PlayerRow) -> Result<(), PostgresError> {
        sqlx::query(
            "INSERT INTO players (id, name, group_id, account_id, level, vocation,
                                  health, healthmax, experience,
                                  lookbody, lookfeet, lookhead, looklegs, looktype,
                                  mana, manamax, town_id, conditions, cap, sex, lastlogin)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                     $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                group_id = EXCLUDED.group_id,
                account_id = EXCLUDED.account_id,
                level = EXCLUDED.level,
                vocation = EXCLUDED.vocation,
                health = EXCLUDED.health,
                healthmax = EXCLUDED.healthmax,
                experience = EXCLUDED.experience,
                lookbody = EXCLUDED.lookbody,
                lookfeet = EXCLUDED.lookfeet,
                lookhead = EXCLUDED.lookhead,
                looklegs = EXCLUDED.looklegs,
                looktype = EXCLUDED.looktype,
                mana = EXCLUDED.mana,
                manamax = EXCLUDED.manamax,
                town_id = EXCLUDED.town_id,
                conditions = EXCLUDED.conditions,
                cap = EXCLUDED.cap,
                sex = EXCLUDED.sex,
                lastlogin = EXCLUDED.lastlogin",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(row.group_id)
        .bind(row.account_id)
        .bind(row.level)
        .bind(row.vocation)
        .bind(row.health)
        .bind(row.healthmax)
        .bind(row.experience)
        .bind(row.lookbody)
        .bind(row.lookfeet)
        .bind(row.lookhead)
        .bind(row.looklegs)
        .bind(row.looktype)
        .bind(row.mana)
        .bind(row.manamax)
        .bind(row.town_id)
        .bind(&row.conditions)
        .bind(row.cap)
        .bind(row.sex)
        .bind(row.lastlogin)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        debug!("Upserted player {} (id={})", row.name, row.id);
        Ok(())
    }
}

/// Tables keyed by a numeric `id` with a unique `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdTable {
    Accounts,
    Towns,
    Players,
}

impl IdTable {
    pub fn name(&self) -> &'static str {
        match self {
            IdTable::Accounts => "accounts",
            IdTable::Towns => "towns",
            IdTable::Players => "players",
        }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub email: String,
    #[sqlx(rename = "type")]
    pub account_type: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct TownRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
    pub group_id: i32,
    pub account_id: i64,
    pub level: i32,
    pub vocation: i32,
    pub health: i32,
    pub healthmax: i32,
    pub experience: i64,
    pub lookbody: i32,
    pub lookfeet: i32,
    pub lookhead: i32,
    pub looklegs: i32,
    pub looktype: i32,
    pub mana: i32,
    pub manamax: i32,
    pub town_id: i64,
    pub conditions: Vec<u8>,
    pub cap: i32,
    pub sex: i32,
    pub lastlogin: i64,
}
