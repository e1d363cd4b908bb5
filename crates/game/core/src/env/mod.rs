//! Read-only collaborators injected into combat resolution.
//!
//! [`FightEnv`] bundles the balance configuration, the item-effect oracle
//! and the RNG oracle. Actions and Fight Managers read from it but never
//! mutate it, so one environment can serve any number of encounters.
pub mod items;
pub mod rng;

pub use items::{ItemDefinition, ItemEffect, ItemId, ItemOracle, ItemTable};
pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::CombatConfig;

static DEFAULT_RNG: PcgRng = PcgRng;

/// Aggregates the oracles required by the action pipeline.
#[derive(Clone, Copy)]
pub struct FightEnv<'a> {
    config: &'a CombatConfig,
    items: Option<&'a (dyn ItemOracle + 'a)>,
    rng: &'a (dyn RngOracle + 'a),
}

impl<'a> FightEnv<'a> {
    /// Environment with no item oracle and the default PCG roller.
    pub fn new(config: &'a CombatConfig) -> Self {
        Self {
            config,
            items: None,
            rng: &DEFAULT_RNG,
        }
    }

    pub fn with_all(
        config: &'a CombatConfig,
        items: &'a (dyn ItemOracle + 'a),
        rng: &'a (dyn RngOracle + 'a),
    ) -> Self {
        Self {
            config,
            items: Some(items),
            rng,
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: &'a (dyn ItemOracle + 'a)) -> Self {
        self.items = Some(items);
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: &'a (dyn RngOracle + 'a)) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    /// Returns the item oracle, if one was provided.
    pub fn items(&self) -> Option<&'a (dyn ItemOracle + 'a)> {
        self.items
    }

    pub fn rng(&self) -> &'a (dyn RngOracle + 'a) {
        self.rng
    }
}

impl core::fmt::Debug for FightEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FightEnv")
            .field("config", self.config)
            .field("items", &self.items.is_some())
            .finish_non_exhaustive()
    }
}
