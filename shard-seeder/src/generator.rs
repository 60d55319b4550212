//! Procedural world generation
//!
//! `GeneratorContext` owns everything the generator mutates: the three id
//! counters and the RNG. Counters start just above the highest id found in
//! the store, so generated ids never collide with rows from earlier runs.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use sha1::{Digest, Sha1};
use shard_core::{GroupId, Level, Sex, VocationClass};
use std::ops::RangeInclusive;
use tracing::{debug, warn};

use crate::error::{SeedError, SeedResult};
use crate::names;
use crate::records::*;
use crate::storage::seed_data::PLAYER_ACCOUNT_TYPE;
use crate::storage::WorldStore;

/// Generated characters last logged in somewhere in this window
const LAST_LOGIN_WINDOW_DAYS: i64 = 365;

// ============================================================================
// Id counters
// ============================================================================

/// Monotonic id source for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounter {
    next: i64,
}

impl IdCounter {
    /// Start after `max_id`, or at 1 for an empty table
    pub fn after(max_id: Option<i64>) -> Self {
        Self {
            next: max_id.map_or(1, |max| max.max(0) + 1),
        }
    }

    pub fn peek(&self) -> i64 {
        self.next
    }

    /// Hand out the next id
    pub fn advance(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Mark `id` as used by a fixed record
    pub fn reserve(&mut self, id: i64) {
        self.next = self.next.max(id + 1);
    }
}

// ============================================================================
// Generator context
// ============================================================================

pub struct GeneratorContext {
    pub accounts: IdCounter,
    pub towns: IdCounter,
    pub characters: IdCounter,
    rng: Xoshiro256PlusPlus,
    level_range: RangeInclusive<u32>,
    max_name_attempts: u32,
}

impl GeneratorContext {
    /// Initialize the counters from the store's current max ids
    pub async fn load(
        store: &dyn WorldStore,
        seed: Option<u64>,
        level_range: RangeInclusive<u32>,
        max_name_attempts: u32,
    ) -> SeedResult<Self> {
        let accounts = IdCounter::after(store.max_id(EntityKind::Account).await?);
        let towns = IdCounter::after(store.max_id(EntityKind::Town).await?);
        let characters = IdCounter::after(store.max_id(EntityKind::Character).await?);

        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };

        debug!(
            "Generator counters: account={} town={} character={}",
            accounts.peek(),
            towns.peek(),
            characters.peek()
        );

        Ok(Self {
            accounts,
            towns,
            characters,
            rng,
            level_range,
            max_name_attempts,
        })
    }

    pub fn rng(&mut self) -> &mut Xoshiro256PlusPlus {
        &mut self.rng
    }

    pub fn town(&mut self) -> TownRecord {
        TownRecord {
            id: self.towns.advance(),
            name: names::town_name(&mut self.rng),
        }
    }

    /// Random player account with a name no stored account uses
    pub async fn account(&mut self, store: &dyn WorldStore) -> SeedResult<AccountRecord> {
        let name = self
            .unused_name(store, EntityKind::Account, names::username)
            .await?;
        let email = names::email(&name);
        let password = sha1_hex(&names::password(&mut self.rng));

        Ok(AccountRecord {
            id: self.accounts.advance(),
            name,
            email,
            password,
            account_type: PLAYER_ACCOUNT_TYPE,
        })
    }

    /// Random character for `account_id`, living in one of `town_ids`
    pub async fn character(
        &mut self,
        store: &dyn WorldStore,
        account_id: i64,
        town_ids: &[i64],
    ) -> SeedResult<CharacterRecord> {
        let name = self
            .unused_name(store, EntityKind::Character, names::character_name)
            .await?;
        let level = Level::new(self.rng.gen_range(self.level_range.clone()))?;
        let vocation = *VocationClass::BASE_TIERS
            .choose(&mut self.rng)
            .unwrap_or(&VocationClass::None);
        let sex = *Sex::ALL.choose(&mut self.rng).unwrap_or(&Sex::Male);
        let town_id = *town_ids.choose(&mut self.rng).ok_or_else(|| {
            SeedError::InvalidConfig("cannot place a character without any towns".into())
        })?;

        Ok(CharacterRecord::roll(NewCharacter {
            id: self.characters.advance(),
            name,
            level,
            vocation,
            sex,
            group: GroupId::Player,
            account_id,
            town_id,
            last_login: self.last_login(),
        }))
    }

    /// Roll names until the store has no `kind` with that name
    async fn unused_name(
        &mut self,
        store: &dyn WorldStore,
        kind: EntityKind,
        roll: fn(&mut Xoshiro256PlusPlus) -> String,
    ) -> SeedResult<String> {
        for attempt in 1..=self.max_name_attempts {
            let candidate = roll(&mut self.rng);
            if store.find_id_by_name(kind, &candidate).await?.is_none() {
                return Ok(candidate);
            }
            if attempt % 100 == 0 {
                warn!("Still looking for a free {} name after {} attempts", kind, attempt);
            } else {
                debug!("{} name {} taken, re-rolling", kind, candidate);
            }
        }
        Err(SeedError::NamePoolExhausted {
            kind,
            attempts: self.max_name_attempts,
        })
    }

    /// Epoch seconds within the last year
    fn last_login(&mut self) -> i64 {
        let now = Utc::now();
        let window = Duration::days(LAST_LOGIN_WINDOW_DAYS).num_seconds();
        let ago = self.rng.gen_range(0..=window);
        (now - Duration::seconds(ago)).timestamp()
    }
}

/// Lowercase hex SHA-1 digest, the format the game server checks passwords against
pub fn sha1_hex(input: &str) -> String {
    hex::encode(Sha1::digest(input.as_bytes()))
}
