//! Combatant state and the persistent half of its Fight Manager.

use crate::config::CombatConfig;
use crate::env::{FightEnv, ItemId};
use crate::error::ConfigError;
use crate::fight::FightManager;
use crate::state::{CombatantId, HealthMeter, Inventory, InventoryError, StatusEffects, Turn};

/// Lifecycle of one combatant's participation in an encounter.
///
/// `Defeated` and `Fled` are terminal: once reached, every combat
/// operation short-circuits to a no-op result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightStatus {
    /// Still fighting; `blocking` is consumed by the next incoming attack.
    Active { blocking: bool },
    /// Health reached zero.
    Defeated,
    /// Left the encounter through a successful flee.
    Fled,
}

impl FightStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FightStatus::Active { .. })
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, FightStatus::Active { blocking: true })
    }
}

impl Default for FightStatus {
    fn default() -> Self {
        FightStatus::Active { blocking: false }
    }
}

/// Persistent per-encounter state owned by the Fight Manager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightState {
    pub status: FightStatus,
    pub turn: Turn,
}

/// One side of a fight.
///
/// # Invariants
///
/// - `health.current() == 0` if and only if `fight.status == Defeated`
/// - Fields are only mutated through [`FightManager`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    id: CombatantId,
    name: String,
    pub(crate) health: HealthMeter,
    pub(crate) status_effects: StatusEffects,
    pub(crate) inventory: Inventory,
    pub(crate) fight: FightState,
}

impl Combatant {
    /// Creates a combatant at full health using `config.max_health`.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        config: &CombatConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_health(id, name, HealthMeter::full(config.max_health)?))
    }

    /// Creates a combatant with an explicit health pool.
    ///
    /// A depleted pool starts the combatant in the `Defeated` state.
    pub fn from_health(id: CombatantId, name: impl Into<String>, health: HealthMeter) -> Self {
        let status = if health.is_depleted() {
            FightStatus::Defeated
        } else {
            FightStatus::default()
        };
        Self {
            id,
            name: name.into(),
            health,
            status_effects: StatusEffects::empty(),
            inventory: Inventory::empty(),
            fight: FightState {
                status,
                turn: Turn::ZERO,
            },
        }
    }

    /// Adds starting items (builder pattern).
    pub fn with_item(mut self, item: ItemId, quantity: u16) -> Result<Self, InventoryError> {
        self.inventory.add(item, quantity)?;
        Ok(self)
    }

    /// Opens the Fight Manager for this combatant.
    ///
    /// The manager borrows the combatant for the duration of one operation.
    pub fn fight_manager<'a>(&'a mut self, env: &'a FightEnv<'a>) -> FightManager<'a> {
        FightManager::new(self, env)
    }

    pub fn id(&self) -> CombatantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> &HealthMeter {
        &self.health
    }

    pub fn status_effects(&self) -> &StatusEffects {
        &self.status_effects
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn fight_state(&self) -> &FightState {
        &self.fight
    }

    pub fn status(&self) -> FightStatus {
        self.fight.status
    }

    pub fn turn(&self) -> Turn {
        self.fight.turn
    }

    pub fn is_blocking(&self) -> bool {
        self.fight.status.is_blocking()
    }

    pub fn is_defeated(&self) -> bool {
        self.fight.status == FightStatus::Defeated
    }

    pub fn has_fled(&self) -> bool {
        self.fight.status == FightStatus::Fled
    }
}
