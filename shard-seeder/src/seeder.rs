//! World seeding
//!
//! Writes the fixed bootstrap records, then tops the random population up to
//! the configured targets. Every write is an upsert by id and the random
//! population is only ever topped up, so a second run against a seeded store
//! changes nothing.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SeederConfig;
use crate::error::{SeedError, SeedResult};
use crate::generator::GeneratorContext;
use crate::names;
use crate::records::TownRecord;
use crate::storage::seed_data::{self, GOD_ACCOUNT_ID, HOME_TOWN_ID};
use crate::storage::WorldStore;

/// What a seeding run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Server config entries, god account and sample roster
    pub fixed_records: u32,
    pub towns_created: u32,
    pub accounts_created: u32,
    pub characters_created: u32,
}

impl SeedReport {
    /// Random records created in this run
    pub fn created(&self) -> u32 {
        self.towns_created + self.accounts_created + self.characters_created
    }
}

/// Fail fast when the requested population cannot fit the name pool
pub fn check_plan(config: &SeederConfig) -> SeedResult<()> {
    config
        .validate()
        .map_err(|e| SeedError::InvalidConfig(e.to_string()))?;

    let needed = seed_data::sample_roster_len() as u64 + config.character_target();
    let available = names::character_pool_size() as u64;
    if needed > available {
        return Err(SeedError::InvalidConfig(format!(
            "{} accounts x {} characters plus the sample roster needs {} names, the pool has {}",
            config.accounts, config.characters_per_account, needed, available
        )));
    }
    Ok(())
}

/// Seed `store` according to `config`
pub async fn seed_world(store: &dyn WorldStore, config: &SeederConfig) -> SeedResult<SeedReport> {
    check_plan(config)?;

    let mut ctx = GeneratorContext::load(
        store,
        config.seed,
        config.min_level..=config.max_level,
        config.max_name_attempts,
    )
    .await?;
    let mut report = SeedReport::default();

    // ========================================================================
    // 1. Server config
    // ========================================================================
    for entry in seed_data::server_config() {
        store.upsert_server_config(&entry).await?;
        report.fixed_records += 1;
    }
    info!("Server config written");

    // ========================================================================
    // 2. Towns
    // ========================================================================
    report.towns_created = seed_towns(store, &mut ctx, config.towns).await?;

    // ========================================================================
    // 3. God account and sample roster
    // ========================================================================
    store.upsert_account(&seed_data::god_account()).await?;
    ctx.accounts.reserve(GOD_ACCOUNT_ID);
    report.fixed_records += 1;

    for character in seed_data::sample_roster()? {
        store.upsert_character(&character).await?;
        ctx.characters.reserve(character.id);
        debug!("Sample character {} (id={})", character.name, character.id);
        report.fixed_records += 1;
    }
    info!("God account and sample roster written");

    // ========================================================================
    // 4. Random accounts and their characters
    // ========================================================================
    let town_ids = store.town_ids().await?;
    // Generated accounts are recognized by their email domain
    let existing = store
        .account_ids_by_email_domain(names::SEED_EMAIL_DOMAIN)
        .await?;

    for &account_id in &existing {
        report.characters_created +=
            top_up_characters(store, &mut ctx, account_id, &town_ids, config).await?;
    }

    let missing = (config.accounts as usize).saturating_sub(existing.len());
    info!(
        "Adding {} random accounts ({} already present)",
        missing,
        existing.len()
    );
    for _ in 0..missing {
        let account = ctx.account(store).await?;
        store.upsert_account(&account).await?;
        report.accounts_created += 1;
        info!("Adding random players to {} (id={})", account.name, account.id);
        report.characters_created +=
            top_up_characters(store, &mut ctx, account.id, &town_ids, config).await?;
    }

    info!(
        "Database has been seeded: {} fixed records, {} towns, {} accounts, {} characters created",
        report.fixed_records, report.towns_created, report.accounts_created, report.characters_created
    );
    Ok(report)
}

/// Make sure the home town exists, then fill up to `target` towns
async fn seed_towns(
    store: &dyn WorldStore,
    ctx: &mut GeneratorContext,
    target: u32,
) -> SeedResult<u32> {
    let mut created = 0;

    if store.town(HOME_TOWN_ID).await?.is_none() {
        let home = TownRecord {
            id: HOME_TOWN_ID,
            name: names::town_name(ctx.rng()),
        };
        store.upsert_town(&home).await?;
        created += 1;
    }
    ctx.towns.reserve(HOME_TOWN_ID);

    let present = store.town_ids().await?.len();
    for _ in present..target as usize {
        let town = ctx.town();
        store.upsert_town(&town).await?;
        debug!("Town {} (id={})", town.name, town.id);
        created += 1;
    }

    info!("Towns ready ({} created)", created);
    Ok(created)
}

async fn top_up_characters(
    store: &dyn WorldStore,
    ctx: &mut GeneratorContext,
    account_id: i64,
    town_ids: &[i64],
    config: &SeederConfig,
) -> SeedResult<u32> {
    let present = store.character_count(account_id).await?;
    let mut created = 0;
    for _ in present..config.characters_per_account {
        let character = ctx.character(store, account_id, town_ids).await?;
        store.upsert_character(&character).await?;
        debug!(
            "Character {} (id={}, level {} {})",
            character.name,
            character.id,
            character.level,
            character.vocation
        );
        created += 1;
    }
    Ok(created)
}
