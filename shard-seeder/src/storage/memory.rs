//! In-memory WorldStore
//!
//! Keeps every table in a `BTreeMap` behind a `parking_lot::Mutex` and
//! enforces the same unique-name and foreign-key rules as the Postgres
//! schema, so seeding logic behaves identically against either backend.
//! Used by tests and by `SEED_DRY_RUN`.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;

use super::repository::*;
use crate::records::*;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryTables {
    pub server_config: BTreeMap<String, String>,
    pub accounts: BTreeMap<i64, AccountRecord>,
    pub towns: BTreeMap<i64, TownRecord>,
    pub characters: BTreeMap<i64, CharacterRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> MemoryTables {
        self.tables.lock().clone()
    }

    pub fn account_count(&self) -> usize {
        self.tables.lock().accounts.len()
    }

    pub fn town_count(&self) -> usize {
        self.tables.lock().towns.len()
    }

    pub fn character_total(&self) -> usize {
        self.tables.lock().characters.len()
    }
}

fn name_taken<'a, T: 'a>(
    rows: impl IntoIterator<Item = (&'a i64, &'a T)>,
    id: i64,
    name: &str,
    name_of: impl Fn(&T) -> &str,
) -> bool {
    rows.into_iter()
        .any(|(other, row)| *other != id && name_of(row) == name)
}

#[async_trait]
impl WorldStore for MemoryStore {
    async fn max_id(&self, kind: EntityKind) -> RepoResult<Option<i64>> {
        let t = self.tables.lock();
        Ok(match kind {
            EntityKind::Account => t.accounts.keys().next_back().copied(),
            EntityKind::Town => t.towns.keys().next_back().copied(),
            EntityKind::Character => t.characters.keys().next_back().copied(),
        })
    }

    async fn find_id_by_name(&self, kind: EntityKind, name: &str) -> RepoResult<Option<i64>> {
        let t = self.tables.lock();
        Ok(match kind {
            EntityKind::Account => t.accounts.values().find(|a| a.name == name).map(|a| a.id),
            EntityKind::Town => t.towns.values().find(|tw| tw.name == name).map(|tw| tw.id),
            EntityKind::Character => t.characters.values().find(|c| c.name == name).map(|c| c.id),
        })
    }

    async fn character_by_name(&self, name: &str) -> RepoResult<Option<CharacterRecord>> {
        let t = self.tables.lock();
        Ok(t.characters.values().find(|c| c.name == name).cloned())
    }

    async fn town(&self, id: i64) -> RepoResult<Option<TownRecord>> {
        Ok(self.tables.lock().towns.get(&id).cloned())
    }

    async fn town_ids(&self) -> RepoResult<Vec<i64>> {
        Ok(self.tables.lock().towns.keys().copied().collect())
    }

    async fn account_ids_by_email_domain(&self, domain: &str) -> RepoResult<Vec<i64>> {
        let suffix = format!("@{}", domain);
        let t = self.tables.lock();
        Ok(t.accounts
            .values()
            .filter(|a| a.email.ends_with(&suffix))
            .map(|a| a.id)
            .collect())
    }

    async fn character_count(&self, account_id: i64) -> RepoResult<u32> {
        let t = self.tables.lock();
        Ok(t.characters
            .values()
            .filter(|c| c.account_id == account_id)
            .count() as u32)
    }

    async fn upsert_server_config(&self, entry: &ServerConfigEntry) -> RepoResult<()> {
        self.tables
            .lock()
            .server_config
            .insert(entry.config.clone(), entry.value.clone());
        Ok(())
    }

    async fn upsert_account(&self, account: &AccountRecord) -> RepoResult<()> {
        let mut t = self.tables.lock();
        if name_taken(&t.accounts, account.id, &account.name, |a| a.name.as_str()) {
            return Err(StoreError::Constraint(format!(
                "account name {:?} already exists",
                account.name
            )));
        }
        t.accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn upsert_town(&self, town: &TownRecord) -> RepoResult<()> {
        self.tables.lock().towns.insert(town.id, town.clone());
        Ok(())
    }

    async fn upsert_character(&self, character: &CharacterRecord) -> RepoResult<()> {
        let mut t = self.tables.lock();
        if name_taken(&t.characters, character.id, &character.name, |c| c.name.as_str()) {
            return Err(StoreError::Constraint(format!(
                "player name {:?} already exists",
                character.name
            )));
        }
        if !t.accounts.contains_key(&character.account_id) {
            return Err(StoreError::Constraint(format!(
                "player {} references missing account {}",
                character.id, character.account_id
            )));
        }
        if !t.towns.contains_key(&character.town_id) {
            return Err(StoreError::Constraint(format!(
                "player {} references missing town {}",
                character.id, character.town_id
            )));
        }
        t.characters.insert(character.id, character.clone());
        Ok(())
    }
}
