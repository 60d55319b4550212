//! Seed Data - fixed records every shard starts with
//!
//! Server bootstrap config, the god account and the sample roster. These are
//! identical on every run, which is what keeps re-seeding idempotent.

use shard_core::{GroupId, Level, Sex, StatError, VocationClass};

use crate::records::*;

pub const GOD_ACCOUNT_ID: i64 = 1;
pub const GOD_ACCOUNT_TYPE: i32 = 5;
pub const PLAYER_ACCOUNT_TYPE: i32 = 1;

/// Town the sample roster lives in
pub const HOME_TOWN_ID: i64 = 1;

/// SHA-1 of the god account password
const GOD_PASSWORD_HASH: &str = "21298df8a3277357ee55b01df9530b535cf08ec1";

const SERVER_CONFIG: &[(&str, &str)] = &[
    ("db_version", "24"),
    ("motd_hash", ""),
    ("motd_num", "0"),
    ("players_record", "0"),
];

/// (id, name, level, vocation, group)
const SAMPLE_ROSTER: &[(i64, &str, u32, VocationClass, GroupId)] = &[
    (1, "Rook Sample", 1, VocationClass::None, GroupId::Player),
    (2, "Sorcerer Sample", 8, VocationClass::Sorcerer, GroupId::Player),
    (3, "Druid Sample", 8, VocationClass::Druid, GroupId::Player),
    (4, "Paladin Sample", 8, VocationClass::Paladin, GroupId::Player),
    (5, "Knight Sample", 8, VocationClass::Knight, GroupId::Player),
    (6, "God", 2, VocationClass::None, GroupId::God),
];

pub fn server_config() -> Vec<ServerConfigEntry> {
    SERVER_CONFIG
        .iter()
        .map(|(config, value)| ServerConfigEntry::new(config, value))
        .collect()
}

pub fn god_account() -> AccountRecord {
    AccountRecord {
        id: GOD_ACCOUNT_ID,
        name: "god".into(),
        email: "@god".into(),
        password: GOD_PASSWORD_HASH.into(),
        account_type: GOD_ACCOUNT_TYPE,
    }
}

/// Number of characters in the sample roster
pub fn sample_roster_len() -> usize {
    SAMPLE_ROSTER.len()
}

/// The sample characters, all male, owned by the god account and never logged in
pub fn sample_roster() -> Result<Vec<CharacterRecord>, StatError> {
    SAMPLE_ROSTER
        .iter()
        .map(|&(id, name, level, vocation, group)| {
            Ok(CharacterRecord::roll(NewCharacter {
                id,
                name: name.into(),
                level: Level::new(level)?,
                vocation,
                sex: Sex::Male,
                group,
                account_id: GOD_ACCOUNT_ID,
                town_id: HOME_TOWN_ID,
                last_login: 0,
            }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_bootstrap_set() {
        let entries = server_config();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], ServerConfigEntry::new("db_version", "24"));
        assert!(entries.iter().any(|e| e.config == "motd_hash" && e.value.is_empty()));
    }

    #[test]
    fn test_god_account_hash_is_sha1_hex() {
        let god = god_account();
        assert_eq!(god.password.len(), 40);
        assert!(god.password.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(god.account_type, 5);
    }

    #[test]
    fn test_sample_roster() {
        let roster = sample_roster().unwrap();
        assert_eq!(roster.len(), 6);

        let rook = &roster[0];
        assert_eq!(rook.name, "Rook Sample");
        assert_eq!(rook.stats.health, 145);
        assert_eq!(rook.stats.mana, 50);
        assert_eq!(rook.stats.carry_capacity, 400);
        assert_eq!(rook.stats.experience, 0);

        let god = &roster[5];
        assert_eq!(god.group, GroupId::God);
        assert_eq!(god.appearance.look_type, 75);
        assert!(roster.iter().all(|c| c.account_id == 1 && c.town_id == 1));
        assert!(roster.iter().all(|c| c.last_login == 0 && c.sex == Sex::Male));
    }
}
