use crate::state::{FightStatus, StatusKind, Turn};

use super::FightManager;

/// Health change caused by a status effect at the end of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTick {
    pub kind: StatusKind,
    /// Health actually lost (poison) or gained (regeneration).
    pub amount: u32,
}

/// What happened while a combatant's turn advanced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    /// The turn the combatant is now on.
    pub turn: Turn,
    pub ticks: Vec<StatusTick>,
    /// True if a status tick defeated the combatant.
    pub defeated: bool,
}

impl<'a> FightManager<'a> {
    /// Closes the combatant's current turn.
    ///
    /// Applies one tick of every status effect active on the closing turn,
    /// increments the turn counter and prunes expired effects. Terminal
    /// combatants only have their counter advanced. Called by the
    /// surrounding layer once per fully resolved action, never by actions.
    pub fn advance_turn(&mut self) -> TurnSummary {
        let config = self.env.config();
        let closing = self.combatant.fight.turn;
        let mut summary = TurnSummary::default();

        if !self.combatant.fight.status.is_terminal() {
            let active: Vec<StatusKind> = self
                .combatant
                .status_effects
                .active_at(closing)
                .map(|effect| effect.kind)
                .collect();

            for kind in active {
                let amount = match kind {
                    StatusKind::Poisoned => self.combatant.health.damage(config.poison_damage),
                    StatusKind::Regenerating => {
                        self.combatant.health.heal(config.regeneration_heal)
                    }
                    StatusKind::Shielded => continue,
                };
                summary.ticks.push(StatusTick { kind, amount });

                if self.combatant.health.is_depleted() {
                    self.combatant.fight.status = FightStatus::Defeated;
                    summary.defeated = true;
                    tracing::info!(combatant = %self.combatant.id(), %kind, "combatant succumbed");
                    break;
                }
            }
        }

        let next = self.spend_turn();
        summary.turn = next;

        tracing::trace!(
            combatant = %self.combatant.id(),
            turn = next.0,
            ticks = summary.ticks.len(),
            "turn advanced"
        );
        summary
    }

    /// Moves to the next turn and prunes expired effects, without ticking
    /// any status effect.
    pub(super) fn spend_turn(&mut self) -> Turn {
        let next = self.combatant.fight.turn.next();
        self.combatant.fight.turn = next;
        self.combatant.status_effects.remove_expired(next);
        next
    }
}
