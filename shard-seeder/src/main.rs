use anyhow::Context;
use tracing::{error, info};

use shard_seeder::logging::{init_tracing, init_tracing_default};
use shard_seeder::{seed_world, storage, MemoryStore, SeederConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // No-op when the config loaded and tracing is already up
        init_tracing_default();
        error!("Seeding failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SeederConfig::from_env().context("loading seeder config")?;
    init_tracing(&config.logging);

    info!(
        "Seeding {} towns, {} accounts x {} characters (levels {}..={})",
        config.towns,
        config.accounts,
        config.characters_per_account,
        config.min_level,
        config.max_level
    );

    let report = if config.dry_run {
        info!("Dry run: seeding an in-memory store");
        seed_world(&MemoryStore::new(), &config).await?
    } else {
        info!("Connecting to PostgreSQL...");
        let (pg, world) = storage::connect(&config.database_url, config.pg_max_connections)
            .await
            .context("connecting to PostgreSQL")?;

        let result = seed_world(&world, &config).await;
        // Release the pool whether or not seeding succeeded
        pg.close().await;
        result?
    };

    info!(
        "Seed report: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );
    Ok(())
}
