//! Fight Manager: the sole mutator of a combatant's combat state.
//!
//! A [`FightManager`] is a short-lived handle that borrows one
//! [`Combatant`] mutably together with the injected [`FightEnv`]. Actions
//! obtain it through [`Combatant::fight_manager`] and call exactly one
//! operation on it; the manager enforces every combat invariant:
//!
//! - health stays within `[0, maximum]`
//! - the blocking flag is consumed by the next incoming attack
//! - `Defeated` and `Fled` are terminal; every later operation returns a
//!   no-op result and leaves state untouched
//! - all preconditions are checked before the first mutation

pub mod damage;
pub mod flee;
mod turn;

pub use damage::{Mitigation, mitigate};
pub use flee::FleeRoll;
pub use turn::{StatusTick, TurnSummary};

use crate::env::{FightEnv, ItemEffect, ItemId};
use crate::result::{FightResult, Outcome, ParameterError};
use crate::state::{Combatant, CombatantId, FightStatus, StatusKind};

pub struct FightManager<'a> {
    combatant: &'a mut Combatant,
    env: &'a FightEnv<'a>,
}

impl<'a> FightManager<'a> {
    pub fn new(combatant: &'a mut Combatant, env: &'a FightEnv<'a>) -> Self {
        Self { combatant, env }
    }

    /// Read access to the managed combatant.
    pub fn combatant(&self) -> &Combatant {
        self.combatant
    }

    /// Raises the defensive flag for the next incoming attack.
    pub fn block(&mut self) -> FightResult {
        if let Some(result) = self.terminal_result() {
            return result;
        }

        self.combatant.fight.status = FightStatus::Active { blocking: true };
        tracing::debug!(combatant = %self.combatant.id(), "raised guard");

        FightResult::new(
            Outcome::Blocked,
            0,
            format!("{} raises their guard", self.combatant.name()),
        )
    }

    /// Applies an incoming attack of `amount` raw damage from `source`.
    pub fn receive_attack(&mut self, amount: u32, source: CombatantId) -> FightResult {
        if let Some(result) = self.terminal_result() {
            return result;
        }

        let config = self.env.config();
        let turn = self.combatant.fight.turn;
        let blocking = self.combatant.is_blocking();
        let shield = if self.combatant.status_effects.has(StatusKind::Shielded, turn) {
            config.shield_absorb
        } else {
            0
        };
        let mitigation = mitigate(amount, blocking, config.block_divisor, shield);

        let applied = self.combatant.health.damage(mitigation.effective);
        let remaining = self.combatant.health.current();
        let defeated = self.combatant.health.is_depleted();

        self.combatant.fight.status = if defeated {
            FightStatus::Defeated
        } else {
            FightStatus::Active { blocking: false }
        };

        tracing::debug!(
            combatant = %self.combatant.id(),
            %source,
            amount,
            applied,
            prevented = mitigation.prevented,
            remaining,
            "attack resolved"
        );

        let name = self.combatant.name();
        let description = if defeated {
            tracing::info!(combatant = %self.combatant.id(), %source, "combatant defeated");
            format!("{name} takes {applied} damage from {source} and is defeated")
        } else if mitigation.prevented > 0 {
            format!(
                "{name} takes {applied} damage from {source} ({} prevented)",
                mitigation.prevented
            )
        } else {
            format!("{name} takes {applied} damage from {source}")
        };

        FightResult::new(
            Outcome::Damaged {
                applied,
                prevented: mitigation.prevented,
                remaining,
                defeated,
            },
            applied,
            description,
        )
    }

    /// Tries to leave the encounter according to the configured flee policy.
    ///
    /// A failed attempt spends the turn: the counter advances here, but no
    /// status effect ticks, so health is untouched.
    pub fn attempt_flee(&mut self) -> FightResult {
        if let Some(result) = self.terminal_result() {
            return result;
        }

        let roll = FleeRoll::cast(
            self.env.config(),
            self.env.rng(),
            self.combatant.id(),
            self.combatant.fight.turn,
            &self.combatant.health,
        );

        if roll.escaped() {
            self.combatant.fight.status = FightStatus::Fled;
            tracing::info!(
                combatant = %self.combatant.id(),
                chance = roll.chance,
                roll = roll.roll,
                "combatant fled"
            );
            return FightResult::new(
                Outcome::EncounterEnded,
                roll.chance,
                format!("{} flees the fight", self.combatant.name()),
            );
        }

        tracing::debug!(
            combatant = %self.combatant.id(),
            chance = roll.chance,
            roll = roll.roll,
            "flee failed"
        );
        let description = format!(
            "{} fails to flee (rolled {} against {}%)",
            self.combatant.name(),
            roll.roll,
            roll.chance
        );
        self.spend_turn();

        FightResult::new(
            Outcome::FleeFailed {
                chance: roll.chance,
                roll: roll.roll,
            },
            roll.chance,
            description,
        )
    }

    /// Consumes one unit of `item` and applies its effect.
    pub fn use_item(&mut self, item: ItemId) -> FightResult {
        if let Some(result) = self.terminal_result() {
            return result;
        }

        let Some(items) = self.env.items() else {
            return FightResult::invalid(ParameterError::NoItemCatalog);
        };
        let Some(definition) = items.definition(item) else {
            return FightResult::invalid(ParameterError::UnknownItem(item));
        };
        if !self.combatant.inventory.take_one(item) {
            return FightResult::invalid(ParameterError::ItemNotHeld(item));
        }

        let turn = self.combatant.fight.turn;
        let name = self.combatant.name().to_owned();
        let (magnitude, detail) = match definition.effect {
            ItemEffect::Heal(amount) => {
                let gained = self.combatant.health.heal(amount);
                (gained, format!("recovers {gained} health"))
            }
            ItemEffect::Cure(kind) => {
                let cured = self.combatant.status_effects.remove(kind);
                let detail = if cured {
                    format!("is no longer {kind}")
                } else {
                    format!("was not {kind}")
                };
                (u32::from(cured), detail)
            }
            ItemEffect::ApplyStatus { kind, turns } => {
                self.combatant.status_effects.add(kind, turn + turns);
                (
                    u32::try_from(turns).unwrap_or(u32::MAX),
                    format!("is {kind} for {turns} turns"),
                )
            }
        };

        tracing::debug!(combatant = %self.combatant.id(), %item, magnitude, "item used");

        FightResult::new(
            Outcome::ItemUsed {
                item,
                effect: definition.effect,
            },
            magnitude,
            format!("{name} uses {} and {detail}", definition.name),
        )
    }

    /// Passes the turn without acting.
    pub fn wait(&mut self) -> FightResult {
        if let Some(result) = self.terminal_result() {
            return result;
        }

        FightResult::new(
            Outcome::Waited,
            0,
            format!("{} waits", self.combatant.name()),
        )
    }

    /// Returns the no-op result for a combatant whose encounter is over.
    fn terminal_result(&self) -> Option<FightResult> {
        let name = self.combatant.name();
        match self.combatant.fight.status {
            FightStatus::Active { .. } => None,
            FightStatus::Defeated => Some(FightResult::new(
                Outcome::AlreadyDefeated,
                0,
                format!("{name} is already defeated"),
            )),
            FightStatus::Fled => Some(FightResult::new(
                Outcome::AlreadyFled,
                0,
                format!("{name} has already fled"),
            )),
        }
    }
}
