//! Deterministic combat rules for turn-based encounters.
//!
//! `fight-core` defines the canonical fight logic (actions, phase legality,
//! damage, fleeing, items, status effects) and exposes pure APIs that any
//! game loop can drive. Every state change to a combatant flows through
//! [`fight::FightManager`], and every action reports back a
//! [`result::FightResult`] instead of an error.
pub mod action;
pub mod config;
pub mod encounter;
pub mod env;
pub mod error;
pub mod fight;
pub mod phase;
pub mod result;
pub mod state;

pub use action::{
    Action, AttackAction, AttackStyle, BlockAction, CombatAction, FleeAction, UseItemAction,
    WaitAction,
};
pub use config::{CombatConfig, FleePolicy};
pub use encounter::{
    ActionProvider, Encounter, EncounterStatus, Resolution, ScriptedProvider, Side,
    WaitActionProvider,
};
pub use env::{
    FightEnv, ItemDefinition, ItemEffect, ItemId, ItemOracle, ItemTable, PcgRng, RngOracle,
};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use fight::{FightManager, StatusTick, TurnSummary};
pub use phase::{GamePhase, PhaseSet};
pub use result::{FightResult, Outcome, ParameterError, ResultKind};
pub use state::{
    Combatant, CombatantId, FightState, FightStatus, HealthMeter, Inventory, InventoryError,
    StatusEffect, StatusEffects, StatusKind, Turn,
};
