//! Client configuration read from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fight_content::{ConfigLoader, ItemLoader};
use fight_core::{CombatConfig, ItemTable};

/// Where the client finds its content, and how long a duel may run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// TOML combat balance file (`FIGHT_CONFIG`). Built-in data if unset.
    pub config_path: Option<PathBuf>,
    /// RON item catalog (`FIGHT_ITEMS`). Built-in data if unset.
    pub items_path: Option<PathBuf>,
    /// Overrides the configured seed (`FIGHT_SEED`).
    pub seed: Option<u64>,
    /// Upper bound on submitted actions (`FIGHT_MAX_ACTIONS`).
    pub max_actions: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            items_path: None,
            seed: None,
            max_actions: 64,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = read_env::<PathBuf>("FIGHT_CONFIG");
        config.items_path = read_env::<PathBuf>("FIGHT_ITEMS");
        config.seed = read_env::<u64>("FIGHT_SEED");
        if let Some(limit) = read_env::<usize>("FIGHT_MAX_ACTIONS") {
            config.max_actions = limit.max(1);
        }

        config
    }

    /// Loads combat balance and applies the seed override.
    pub fn combat_config(&self) -> Result<CombatConfig> {
        let config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading combat config from {}", path.display()))?,
            None => ConfigLoader::builtin().context("loading built-in combat config")?,
        };

        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    pub fn item_table(&self) -> Result<ItemTable> {
        match &self.items_path {
            Some(path) => ItemLoader::load(path)
                .with_context(|| format!("loading item catalog from {}", path.display())),
            None => ItemLoader::builtin().context("loading built-in item catalog"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
