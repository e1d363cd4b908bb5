//! Fight demo binary.
//!
//! Loads combat content (built-in, or from `FIGHT_CONFIG` / `FIGHT_ITEMS`),
//! runs one scripted duel and prints every resolved action.
//!
//! ```bash
//! RUST_LOG=fight_core=debug FIGHT_SEED=7 cargo run -p fight-client
//! ```

use anyhow::Result;
use fight_client::{ClientConfig, Duel};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::debug!(?config, "client configuration");

    let combat = config.combat_config()?;
    let items = config.item_table()?;
    tracing::info!(
        seed = combat.seed,
        flee = ?combat.flee,
        items = items.len(),
        "content loaded"
    );

    let report = Duel::new(combat, items).run(config.max_actions)?;
    for line in &report.lines {
        println!("{line}");
    }
    println!("outcome: {:?}", report.status);

    Ok(())
}
