//! Authoritative combat state.
//!
//! A [`Combatant`] carries everything that a fight can change: health,
//! status effects, inventory and the [`FightState`] behind its Fight
//! Manager. Callers read it freely but mutate it exclusively through
//! [`FightManager`](crate::fight::FightManager).
pub mod combatant;
pub mod common;
pub mod health;
pub mod inventory;
pub mod status;

pub use combatant::{Combatant, FightState, FightStatus};
pub use common::{CombatantId, Turn};
pub use health::HealthMeter;
pub use inventory::{Inventory, InventoryError, InventorySlot};
pub use status::{StatusEffect, StatusEffects, StatusKind};
