//! Data-driven combat content and loaders.
//!
//! This crate provides loaders for the RON/TOML files that tune a fight:
//! - Combat balance (`combat.toml`, data-driven via TOML)
//! - Item catalogs (`items.ron`, data-driven via RON)
//!
//! Content feeds the oracles injected into `FightEnv` and never appears in
//! combatant state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult};
