//! Database Migrations - PostgreSQL schema for the shard
//!
//! Mirrors the game server's tables the seeder writes to. Ids are assigned
//! by the seeder, never by sequences, so every primary key is a plain BIGINT.

/// SQL migration for creating all tables
pub const MIGRATION_V1: &str = r#"
-- ============================================================================
-- Shard Database Schema v1
-- ============================================================================

-- ============================================================================
-- 1. Server config (key/value bootstrap)
-- ============================================================================

CREATE TABLE IF NOT EXISTS server_config (
    config          VARCHAR(50) PRIMARY KEY,
    value           VARCHAR(256) NOT NULL DEFAULT ''
);

-- ============================================================================
-- 2. Accounts
-- ============================================================================

CREATE TABLE IF NOT EXISTS accounts (
    id              BIGINT PRIMARY KEY CHECK (id > 0),
    name            VARCHAR(32) UNIQUE NOT NULL,
    password        CHAR(40) NOT NULL,  -- SHA-1 hex digest
    email           VARCHAR(255) NOT NULL DEFAULT '',
    type            INTEGER NOT NULL DEFAULT 1
);

-- ============================================================================
-- 3. Towns
-- ============================================================================

CREATE TABLE IF NOT EXISTS towns (
    id              BIGINT PRIMARY KEY CHECK (id > 0),
    name            VARCHAR(255) NOT NULL
);

-- ============================================================================
-- 4. Players (characters)
-- ============================================================================

CREATE TABLE IF NOT EXISTS players (
    id              BIGINT PRIMARY KEY CHECK (id > 0),
    name            VARCHAR(255) UNIQUE NOT NULL,
    group_id        INTEGER NOT NULL DEFAULT 1,
    account_id      BIGINT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
    level           INTEGER NOT NULL DEFAULT 1 CHECK (level > 0),
    vocation        INTEGER NOT NULL DEFAULT 0 CHECK (vocation BETWEEN 0 AND 8),
    health          INTEGER NOT NULL DEFAULT 150,
    healthmax       INTEGER NOT NULL DEFAULT 150,
    experience      BIGINT NOT NULL DEFAULT 0,
    lookbody        INTEGER NOT NULL DEFAULT 0,
    lookfeet        INTEGER NOT NULL DEFAULT 0,
    lookhead        INTEGER NOT NULL DEFAULT 0,
    looklegs        INTEGER NOT NULL DEFAULT 0,
    looktype        INTEGER NOT NULL DEFAULT 136,
    mana            INTEGER NOT NULL DEFAULT 0,
    manamax         INTEGER NOT NULL DEFAULT 0,
    town_id         BIGINT NOT NULL REFERENCES towns(id),
    conditions      BYTEA NOT NULL,
    cap             INTEGER NOT NULL DEFAULT 400,
    sex             INTEGER NOT NULL DEFAULT 0 CHECK (sex BETWEEN 0 AND 1),
    lastlogin       BIGINT NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_players_account ON players(account_id);
CREATE INDEX IF NOT EXISTS idx_players_town ON players(town_id);
CREATE INDEX IF NOT EXISTS idx_players_experience ON players(experience DESC);
"#;

/// Get all migration SQL statements in order
pub fn get_migrations() -> Vec<(&'static str, &'static str)> {
    vec![("v1_initial_schema", MIGRATION_V1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_named_and_ordered() {
        let migrations = get_migrations();
        assert_eq!(migrations[0].0, "v1_initial_schema");
        for table in ["server_config", "accounts", "towns", "players"] {
            assert!(
                MIGRATION_V1.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "missing table {}",
                table
            );
        }
    }
}
