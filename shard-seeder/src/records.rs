//! Entity records written by the seeder.
//!
//! These are backend-agnostic: the Postgres adapter maps them onto rows and
//! the in-memory store keeps them as-is.

use serde::{Deserialize, Serialize};
use shard_core::{Appearance, GroupId, Level, Sex, StatBlock, VocationClass};

/// Entity kinds keyed by numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Account,
    Town,
    Character,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Account => "account",
            EntityKind::Town => "town",
            EntityKind::Character => "character",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfigEntry {
    pub config: String,
    pub value: String,
}

impl ServerConfigEntry {
    pub fn new(config: &str, value: &str) -> Self {
        Self {
            config: config.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// SHA-1 hex digest
    pub password: String,
    pub account_type: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TownRecord {
    pub id: i64,
    pub name: String,
}

/// Everything needed to roll a character; stats and outfit are derived.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub id: i64,
    pub name: String,
    pub level: Level,
    pub vocation: VocationClass,
    pub sex: Sex,
    pub group: GroupId,
    pub account_id: i64,
    pub town_id: i64,
    pub last_login: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,
    pub level: Level,
    pub vocation: VocationClass,
    pub sex: Sex,
    pub group: GroupId,
    pub account_id: i64,
    pub town_id: i64,
    pub stats: StatBlock,
    pub appearance: Appearance,
    pub conditions: Vec<u8>,
    /// Epoch seconds, 0 = never logged in
    pub last_login: i64,
}

impl CharacterRecord {
    /// Build a fresh character at full health and mana
    pub fn roll(new: NewCharacter) -> Self {
        Self {
            stats: StatBlock::derive(new.level, new.vocation),
            appearance: Appearance::for_group(new.group),
            conditions: Vec::new(),
            id: new.id,
            name: new.name,
            level: new.level,
            vocation: new.vocation,
            sex: new.sex,
            group: new.group,
            account_id: new.account_id,
            town_id: new.town_id,
            last_login: new.last_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_derives_stats_and_outfit() {
        let record = CharacterRecord::roll(NewCharacter {
            id: 7,
            name: "Aldo".into(),
            level: Level::new(20).unwrap(),
            vocation: VocationClass::Knight,
            sex: Sex::Female,
            group: GroupId::Player,
            account_id: 2,
            town_id: 3,
            last_login: 1_700_000_000,
        });
        assert_eq!(record.stats, StatBlock::derive(Level::new(20).unwrap(), VocationClass::Knight));
        assert!(record.stats.is_full());
        assert_eq!(record.appearance.look_type, 129);
        assert!(record.conditions.is_empty());
    }
}
