//! Outcome records produced by action resolution.
//!
//! Every resolution is total: it yields exactly one [`FightResult`], whether
//! the action succeeded, was rejected, or hit a terminal combatant. Rejections
//! are data, not errors, so the dispatch loop never has to unwind.

use std::fmt;

use crate::env::{ItemEffect, ItemId};
use crate::error::{ErrorSeverity, GameError};
use crate::phase::GamePhase;
use crate::state::CombatantId;

/// Malformed or unusable action parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterError {
    /// The item oracle has no definition for this id.
    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    /// The acting combatant does not carry the item.
    #[error("{0} is not in the inventory")]
    ItemNotHeld(ItemId),

    /// No item oracle was provided to the environment.
    #[error("no item catalog is available")]
    NoItemCatalog,

    /// An attack whose source is its own target.
    #[error("a combatant cannot attack itself")]
    SelfTarget,

    /// An attack submitted on behalf of a combatant other than the actor.
    #[error("attack source {0} is not the acting combatant")]
    ForeignSource(CombatantId),

    /// The side submitting the action does not hold the turn.
    #[error("it is not this combatant's turn")]
    OutOfTurn,

    /// The encounter already has a winner or an escapee.
    #[error("the encounter is already over")]
    EncounterOver,
}

impl GameError for ParameterError {
    fn severity(&self) -> ErrorSeverity {
        use ParameterError::*;
        match self {
            UnknownItem(_) | SelfTarget | ForeignSource(_) | NoItemCatalog => {
                ErrorSeverity::Validation
            }
            ItemNotHeld(_) | OutOfTurn | EncounterOver => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ParameterError::*;
        match self {
            UnknownItem(_) => "PARAM_UNKNOWN_ITEM",
            ItemNotHeld(_) => "PARAM_ITEM_NOT_HELD",
            NoItemCatalog => "PARAM_NO_ITEM_CATALOG",
            SelfTarget => "PARAM_SELF_TARGET",
            ForeignSource(_) => "PARAM_FOREIGN_SOURCE",
            OutOfTurn => "PARAM_OUT_OF_TURN",
            EncounterOver => "PARAM_ENCOUNTER_OVER",
        }
    }
}

/// What a resolved action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The combatant raised its guard for the next incoming attack.
    Blocked,

    /// An attack landed.
    Damaged {
        applied: u32,
        prevented: u32,
        remaining: u32,
        defeated: bool,
    },

    /// The combatant fled and left the encounter.
    EncounterEnded,

    /// The flee roll failed; the turn is spent.
    FleeFailed { chance: u32, roll: u32 },

    /// An item was consumed.
    ItemUsed { item: ItemId, effect: ItemEffect },

    /// The combatant passed its turn.
    Waited,

    /// The action is not legal in the current game phase.
    IllegalPhase { phase: GamePhase },

    /// The combatant was already defeated.
    AlreadyDefeated,

    /// The combatant already fled.
    AlreadyFled,

    /// The action carried unusable parameters.
    InvalidParameters(ParameterError),
}

/// Coarse classification of an [`Outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResultKind {
    /// The action resolved as intended.
    Success,
    /// The action resolved but its gamble did not pay off.
    Failed,
    /// The subject was in a terminal state; nothing changed.
    NoOp,
    /// The action was rejected before touching state.
    Illegal,
    /// The action defeated its subject.
    Fatal,
}

impl Outcome {
    pub fn kind(&self) -> ResultKind {
        match self {
            Outcome::Damaged { defeated: true, .. } => ResultKind::Fatal,
            Outcome::Blocked
            | Outcome::Damaged { .. }
            | Outcome::EncounterEnded
            | Outcome::ItemUsed { .. }
            | Outcome::Waited => ResultKind::Success,
            Outcome::FleeFailed { .. } => ResultKind::Failed,
            Outcome::AlreadyDefeated | Outcome::AlreadyFled => ResultKind::NoOp,
            Outcome::IllegalPhase { .. } | Outcome::InvalidParameters(_) => ResultKind::Illegal,
        }
    }
}

/// Immutable record of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightResult {
    outcome: Outcome,
    magnitude: u32,
    description: String,
}

impl FightResult {
    pub fn new(outcome: Outcome, magnitude: u32, description: impl Into<String>) -> Self {
        Self {
            outcome,
            magnitude,
            description: description.into(),
        }
    }

    pub fn illegal_phase(phase: GamePhase, action: &str) -> Self {
        Self::new(
            Outcome::IllegalPhase { phase },
            0,
            format!("{action} is not possible while {phase}"),
        )
    }

    pub fn invalid(error: ParameterError) -> Self {
        Self::new(Outcome::InvalidParameters(error), 0, error.to_string())
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Numeric effect: damage applied, health restored, chance rolled against.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ResultKind {
        self.outcome.kind()
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind(), ResultKind::Success | ResultKind::Fatal)
    }

    /// True if the action never reached combat state.
    pub fn is_rejected(&self) -> bool {
        matches!(self.kind(), ResultKind::NoOp | ResultKind::Illegal)
    }

    /// Damage applied by an attack, or 0 for every other outcome.
    pub fn applied_damage(&self) -> u32 {
        match self.outcome {
            Outcome::Damaged { applied, .. } => applied,
            _ => 0,
        }
    }

    /// True if this result defeated its subject.
    pub fn is_defeated(&self) -> bool {
        matches!(self.outcome, Outcome::Damaged { defeated: true, .. })
    }

    /// True if the subject has left the fight, by this action or earlier.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Damaged { defeated: true, .. }
                | Outcome::EncounterEnded
                | Outcome::AlreadyDefeated
                | Outcome::AlreadyFled
        )
    }
}

impl fmt::Display for FightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
