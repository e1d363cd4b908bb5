//! Action domain: phase-gated units of player intent.
//!
//! Every move is a variant of the closed [`Action`] enum. Each variant pairs
//! a fixed legality set ([`CombatAction::acceptable_phases`]) with an
//! execution hook ([`CombatAction::action_body`]) that delegates to the
//! target's [`FightManager`](crate::fight::FightManager). The phase check in
//! [`CombatAction::invoke`] is shared, so no variant re-implements it.
//!
//! # Module Structure
//!
//! - `attack`: damage another combatant
//! - `block`: raise the actor's guard
//! - `flee`: try to leave the encounter
//! - `item`: consume an inventory item
//! - `wait`: pass the turn

mod attack;
mod block;
mod flee;
mod item;
mod wait;

pub use attack::{AttackAction, AttackStyle};
pub use block::BlockAction;
pub use flee::FleeAction;
pub use item::UseItemAction;
pub use wait::WaitAction;

use crate::env::FightEnv;
use crate::error::ConfigError;
use crate::phase::{GamePhase, PhaseSet};
use crate::result::FightResult;
use crate::state::Combatant;

/// Shared contract of every action variant.
pub trait CombatAction {
    /// Snake-case name used in logs and result descriptions.
    fn name(&self) -> &'static str;

    /// Phases in which invoking this action is legal.
    fn acceptable_phases(&self) -> PhaseSet;

    /// Executes the action against `target` through its Fight Manager.
    ///
    /// Only called once the phase check passed.
    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult;

    /// Checks the phase, then delegates to [`action_body`](Self::action_body).
    ///
    /// An illegal phase yields an `IllegalPhase` result and leaves `target`
    /// untouched.
    fn invoke(&self, phase: GamePhase, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        if !self.acceptable_phases().allows(phase) {
            tracing::warn!(action = self.name(), %phase, "action rejected in current phase");
            return FightResult::illegal_phase(phase, self.name());
        }
        self.action_body(target, env)
    }

    /// Rejects an action that is legal in no phase at all.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.acceptable_phases().is_empty() {
            return Err(ConfigError::EmptyAcceptablePhases {
                action: self.name(),
            });
        }
        Ok(())
    }
}

/// Every move a combatant can make.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Attack(AttackAction),
    Block(BlockAction),
    Flee(FleeAction),
    UseItem(UseItemAction),
    Wait(WaitAction),
}

impl Action {
    pub fn attack(action: AttackAction) -> Self {
        Self::Attack(action)
    }

    pub fn block() -> Self {
        Self::Block(BlockAction)
    }

    pub fn flee() -> Self {
        Self::Flee(FleeAction)
    }

    pub fn use_item(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }

    pub fn wait() -> Self {
        Self::Wait(WaitAction)
    }

    /// True if the action is aimed at another combatant rather than the actor.
    pub fn targets_opponent(&self) -> bool {
        matches!(self, Action::Attack(_))
    }

    fn variant(&self) -> &dyn CombatAction {
        match self {
            Action::Attack(action) => action,
            Action::Block(action) => action,
            Action::Flee(action) => action,
            Action::UseItem(action) => action,
            Action::Wait(action) => action,
        }
    }
}

impl CombatAction for Action {
    fn name(&self) -> &'static str {
        self.into()
    }

    fn acceptable_phases(&self) -> PhaseSet {
        self.variant().acceptable_phases()
    }

    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        self.variant().action_body(target, env)
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Self::Attack(action)
    }
}

impl From<BlockAction> for Action {
    fn from(action: BlockAction) -> Self {
        Self::Block(action)
    }
}

impl From<FleeAction> for Action {
    fn from(action: FleeAction) -> Self {
        Self::Flee(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }
}

impl From<WaitAction> for Action {
    fn from(action: WaitAction) -> Self {
        Self::Wait(action)
    }
}
