//! Combat configuration loader.

use std::path::Path;

use fight_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat balance from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a `CombatConfig` from a TOML file.
    ///
    /// Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded combat config");
        Ok(config)
    }

    /// Parse and validate a `CombatConfig` from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combat config: {}", e))?;

        Ok(config)
    }

    /// The config shipped with the crate.
    pub fn builtin() -> LoadResult<CombatConfig> {
        Self::parse(include_str!("../../data/combat.toml"))
    }
}
