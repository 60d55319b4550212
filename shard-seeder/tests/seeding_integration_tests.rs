//! Integration tests for world seeding
//!
//! Runs the full seeding flow against the in-memory store:
//! Config → GeneratorContext → seed_world → WorldStore

use std::collections::{HashMap, HashSet};

use shard_core::{GroupId, Level, Sex, StatBlock, VocationClass};
use shard_seeder::names::{FAMILY_NAMES, GIVEN_NAMES, SEED_EMAIL_DOMAIN};
use shard_seeder::records::NewCharacter;
use shard_seeder::storage::memory::MemoryTables;
use shard_seeder::*;

fn config(seed: u64) -> SeederConfig {
    SeederConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

async fn seeded(config: &SeederConfig) -> (MemoryStore, SeedReport) {
    let store = MemoryStore::new();
    let report = seed_world(&store, config).await.expect("seeding failed");
    (store, report)
}

fn characters_per_account(tables: &MemoryTables) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for c in tables.characters.values() {
        *counts.entry(c.account_id).or_insert(0) += 1;
    }
    counts
}

// ============================================================================
// Empty store
// ============================================================================

#[tokio::test]
async fn test_seed_empty_store_reaches_targets() {
    let (store, report) = seeded(&config(1)).await;
    let tables = store.snapshot();

    assert_eq!(tables.server_config.len(), 4);
    assert_eq!(tables.server_config.get("db_version").map(String::as_str), Some("24"));
    assert_eq!(store.town_count(), 5);
    assert_eq!(store.account_count(), 11);
    assert_eq!(store.character_total(), 6 + 50);

    assert_eq!(report.fixed_records, 4 + 1 + 6);
    assert_eq!(report.towns_created, 5);
    assert_eq!(report.accounts_created, 10);
    assert_eq!(report.characters_created, 50);

    let counts = characters_per_account(&tables);
    assert_eq!(counts.get(&1), Some(&6));
    for account in tables.accounts.values().filter(|a| a.id != 1) {
        assert_eq!(counts.get(&account.id), Some(&5), "account {}", account.name);
        assert_eq!(account.account_type, 1);
        assert_eq!(account.password.len(), 40);
        assert!(account.email.contains('@'));
    }
}

#[tokio::test]
async fn test_rook_sample_is_seeded_once_with_base_stats() {
    let (store, _) = seeded(&config(2)).await;
    let tables = store.snapshot();

    let rooks: Vec<_> = tables
        .characters
        .values()
        .filter(|c| c.name == "Rook Sample")
        .collect();
    assert_eq!(rooks.len(), 1);

    let rook = rooks[0];
    assert_eq!(rook.id, 1);
    assert_eq!(rook.level.get(), 1);
    assert_eq!(rook.stats.health, 145);
    assert_eq!(rook.stats.mana, 50);
    assert_eq!(rook.stats.carry_capacity, 400);
    assert_eq!(rook.stats.experience, 0);
    assert_eq!(rook.last_login, 0);
}

#[tokio::test]
async fn test_fixed_records() {
    let (store, _) = seeded(&config(3)).await;
    let tables = store.snapshot();

    let god = &tables.accounts[&1];
    assert_eq!(god.name, "god");
    assert_eq!(god.email, "@god");
    assert_eq!(god.password, "21298df8a3277357ee55b01df9530b535cf08ec1");
    assert_eq!(god.account_type, 5);

    let god_char = &tables.characters[&6];
    assert_eq!(god_char.name, "God");
    assert_eq!(god_char.group, GroupId::God);
    assert_eq!(god_char.appearance.look_type, 75);

    let sorcerer = &tables.characters[&2];
    assert_eq!(sorcerer.stats.experience, 4200);
    assert_eq!(sorcerer.stats.carry_capacity, 470);
    assert!(tables.towns.contains_key(&1));
}

#[tokio::test]
async fn test_generated_population_invariants() {
    let (store, _) = seeded(&config(4)).await;
    let tables = store.snapshot();
    let town_ids: HashSet<_> = tables.towns.keys().copied().collect();

    let names: HashSet<_> = tables.characters.values().map(|c| c.name.as_str()).collect();
    assert_eq!(names.len(), tables.characters.len(), "character names must be unique");

    let account_names: HashSet<_> = tables.accounts.values().map(|a| a.name.as_str()).collect();
    assert_eq!(account_names.len(), tables.accounts.len());

    for c in tables.characters.values() {
        assert!(c.stats.is_full(), "{} not at full health/mana", c.name);
        assert_eq!(c.stats, StatBlock::derive(c.level, c.vocation));
        assert!(town_ids.contains(&c.town_id));
        assert!(c.conditions.is_empty());
        if c.id > 6 {
            assert!(!c.vocation.is_promoted());
            assert!((1..=400).contains(&c.level.get()));
            assert_eq!(c.group, GroupId::Player);
            assert!(c.last_login > 0);
        }
    }
}

// ============================================================================
// Idempotence and determinism
// ============================================================================

#[tokio::test]
async fn test_seeding_twice_equals_seeding_once() {
    let store = MemoryStore::new();
    seed_world(&store, &config(5)).await.unwrap();
    let once = store.snapshot();

    let report = seed_world(&store, &config(5)).await.unwrap();
    let twice = store.snapshot();

    assert_eq!(report.created(), 0);
    assert_eq!(report.fixed_records, 11);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_rerun_with_different_seed_changes_nothing() {
    let store = MemoryStore::new();
    seed_world(&store, &config(6)).await.unwrap();
    let once = store.snapshot();

    seed_world(&store, &SeederConfig::default()).await.unwrap();
    assert_eq!(once, store.snapshot());
}

#[tokio::test]
async fn test_same_seed_same_population() {
    let (a, _) = seeded(&config(7)).await;
    let (b, _) = seeded(&config(7)).await;
    let (a, b) = (a.snapshot(), b.snapshot());

    assert_eq!(a.accounts, b.accounts);
    assert_eq!(a.towns, b.towns);
    for (id, ca) in &a.characters {
        let cb = &b.characters[id];
        assert_eq!((&ca.name, ca.level, ca.vocation, ca.sex), (&cb.name, cb.level, cb.vocation, cb.sex));
    }
}

// ============================================================================
// Resume
// ============================================================================

#[tokio::test]
async fn test_resume_tops_up_partial_accounts() {
    let store = MemoryStore::new();
    let partial = SeederConfig {
        characters_per_account: 2,
        ..config(8)
    };
    seed_world(&store, &partial).await.unwrap();
    assert_eq!(store.character_total(), 6 + 20);

    let report = seed_world(&store, &config(8)).await.unwrap();
    assert_eq!(report.accounts_created, 0);
    assert_eq!(report.characters_created, 30);
    assert_eq!(store.character_total(), 6 + 50);

    let counts = characters_per_account(&store.snapshot());
    assert!(counts.iter().filter(|&(&id, _)| id != 1).all(|(_, &n)| n == 5));
}

#[tokio::test]
async fn test_resume_after_interrupted_run_avoids_id_collisions() {
    let store = MemoryStore::new();
    store
        .upsert_town(&TownRecord { id: 1, name: "Thais".into() })
        .await
        .unwrap();
    store
        .upsert_account(&AccountRecord {
            id: 7,
            name: "leftover".into(),
            email: format!("leftover@{}", SEED_EMAIL_DOMAIN),
            password: "a".repeat(40),
            account_type: 1,
        })
        .await
        .unwrap();
    let leftover = CharacterRecord::roll(NewCharacter {
        id: 50,
        name: "Leftover".into(),
        level: Level::new(12).unwrap(),
        vocation: VocationClass::Knight,
        sex: Sex::Female,
        group: GroupId::Player,
        account_id: 7,
        town_id: 1,
        last_login: 1_600_000_000,
    });
    store.upsert_character(&leftover).await.unwrap();

    let report = seed_world(&store, &config(9)).await.unwrap();
    let tables = store.snapshot();

    // The leftover account counts towards the target and is completed
    assert_eq!(report.accounts_created, 9);
    assert_eq!(characters_per_account(&tables).get(&7), Some(&5));
    assert_eq!(tables.characters[&50], leftover);
    assert_eq!(tables.towns[&1].name, "Thais");

    assert!(tables.accounts.keys().filter(|&&id| id != 1 && id != 7).all(|&id| id > 7));
    assert!(tables.characters.keys().filter(|&&id| id > 6 && id != 50).all(|&id| id > 50));
    assert_eq!(store.character_total(), 6 + 50);
}

#[tokio::test]
async fn test_existing_user_accounts_are_left_alone() {
    let store = MemoryStore::new();
    store
        .upsert_account(&AccountRecord {
            id: 2,
            name: "alice".into(),
            email: "alice@example.org".into(),
            password: "b".repeat(40),
            account_type: 1,
        })
        .await
        .unwrap();

    let report = seed_world(&store, &config(13)).await.unwrap();
    let tables = store.snapshot();

    assert_eq!(report.accounts_created, 10);
    assert_eq!(characters_per_account(&tables).get(&2), None);
    assert_eq!(store.account_count(), 12);
    assert!(tables
        .accounts
        .values()
        .filter(|a| a.id > 2)
        .all(|a| a.email.ends_with(&format!("@{}", SEED_EMAIL_DOMAIN))));

    // Still a no-op on the second run
    let again = seed_world(&store, &config(13)).await.unwrap();
    assert_eq!(again.created(), 0);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_name_pool_exhaustion_is_an_error() {
    let store = MemoryStore::new();
    store
        .upsert_town(&TownRecord { id: 1, name: "Carlin".into() })
        .await
        .unwrap();
    store
        .upsert_account(&AccountRecord {
            id: 1,
            name: "god".into(),
            email: "@god".into(),
            password: "0".repeat(40),
            account_type: 5,
        })
        .await
        .unwrap();
    let every_name = GIVEN_NAMES
        .iter()
        .flat_map(|given| FAMILY_NAMES.iter().map(move |family| format!("{} {}", given, family)));
    for (i, name) in every_name.enumerate() {
        let taken = CharacterRecord::roll(NewCharacter {
            id: 100 + i as i64,
            name,
            level: Level::MIN,
            vocation: VocationClass::None,
            sex: Sex::Male,
            group: GroupId::Player,
            account_id: 1,
            town_id: 1,
            last_login: 0,
        });
        store.upsert_character(&taken).await.unwrap();
    }

    let config = SeederConfig {
        accounts: 1,
        characters_per_account: 1,
        max_name_attempts: 50,
        ..config(10)
    };
    match seed_world(&store, &config).await {
        Err(SeedError::NamePoolExhausted { kind, attempts }) => {
            assert_eq!(kind, EntityKind::Character);
            assert_eq!(attempts, 50);
        }
        other => panic!("expected name pool exhaustion, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oversized_plan_fails_before_writing() {
    let store = MemoryStore::new();
    let config = SeederConfig {
        accounts: 1000,
        ..config(11)
    };
    let err = seed_world(&store, &config).await.unwrap_err();
    assert!(matches!(err, SeedError::InvalidConfig(_)));
    assert_eq!(store.snapshot(), MemoryTables::default());
}

#[tokio::test]
async fn test_level_range_is_respected() {
    let config = SeederConfig {
        min_level: 50,
        max_level: 60,
        ..config(12)
    };
    let (store, _) = seeded(&config).await;
    for c in store.snapshot().characters.values().filter(|c| c.id > 6) {
        assert!((50..=60).contains(&c.level.get()), "{} has level {}", c.name, c.level);
    }
}
