//! Encounter driver: two isolated combatants and their turn order.
//!
//! [`Encounter`] is the seam the surrounding game loop talks to. It accepts
//! one action per turn, routes it to the right combatant, advances the
//! actor's turn once the action resolved, and reports when the fight is
//! over. Each encounter owns its combatants outright, so encounters never
//! share state and can be driven from different threads independently.

mod provider;

pub use provider::{ActionProvider, ScriptedProvider, WaitActionProvider};

use crate::action::{Action, CombatAction};
use crate::env::FightEnv;
use crate::phase::GamePhase;
use crate::result::{FightResult, Outcome, ParameterError};
use crate::state::{Combatant, CombatantId};

/// Which side of the encounter a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Whether the encounter is still running, and how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterStatus {
    Ongoing,
    /// The named side defeated the other.
    Victory(Side),
    /// The named side fled.
    Escaped(Side),
}

impl EncounterStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, EncounterStatus::Ongoing)
    }
}

/// One submitted action and what came of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub side: Side,
    pub action: &'static str,
    pub result: FightResult,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encounter {
    player: Combatant,
    opponent: Combatant,
    current: Side,
    history: Vec<Resolution>,
}

impl Encounter {
    /// Starts an encounter; the player acts first.
    pub fn new(player: Combatant, opponent: Combatant) -> Self {
        Self {
            player,
            opponent,
            current: Side::Player,
            history: Vec::new(),
        }
    }

    /// Starts an encounter with `side` acting first.
    #[must_use]
    pub fn with_first_turn(mut self, side: Side) -> Self {
        self.current = side;
        self
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Side whose action is expected next.
    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn history(&self) -> &[Resolution] {
        &self.history
    }

    pub fn status(&self) -> EncounterStatus {
        if self.player.is_defeated() {
            EncounterStatus::Victory(Side::Opponent)
        } else if self.opponent.is_defeated() {
            EncounterStatus::Victory(Side::Player)
        } else if self.player.has_fled() {
            EncounterStatus::Escaped(Side::Player)
        } else if self.opponent.has_fled() {
            EncounterStatus::Escaped(Side::Opponent)
        } else {
            EncounterStatus::Ongoing
        }
    }

    /// Resolves one action submitted by `side`.
    ///
    /// Attacks land on the other side and must name the actor as their
    /// source; every other action targets the actor. A resolved
    /// (non-rejected) action closes the actor's turn and hands the turn to
    /// the other side. Rejected input changes nothing.
    pub fn submit(
        &mut self,
        phase: GamePhase,
        side: Side,
        action: &Action,
        env: &FightEnv<'_>,
    ) -> FightResult {
        let result = if self.status().is_over() {
            FightResult::invalid(ParameterError::EncounterOver)
        } else if side != self.current {
            FightResult::invalid(ParameterError::OutOfTurn)
        } else if let Some(source) = self.foreign_source(side, action) {
            FightResult::invalid(ParameterError::ForeignSource(source))
        } else {
            let target = if action.targets_opponent() {
                side.other()
            } else {
                side
            };
            action.invoke(phase, self.combatant_mut(target), env)
        };

        if result.is_rejected() {
            tracing::warn!(%side, action = action.name(), reason = %result, "input rejected");
        } else {
            self.close_turn(side, &result, env);
        }

        tracing::debug!(%side, action = action.name(), kind = %result.kind(), "{result}");
        self.history.push(Resolution {
            side,
            action: action.name(),
            result: result.clone(),
        });
        result
    }

    /// Drives the encounter with two providers until it ends or
    /// `max_actions` actions were submitted, fallbacks included.
    pub fn run(
        &mut self,
        phase: GamePhase,
        player: &mut dyn ActionProvider,
        opponent: &mut dyn ActionProvider,
        env: &FightEnv<'_>,
        max_actions: usize,
    ) -> EncounterStatus {
        let mut submitted = 0;
        while submitted < max_actions && !self.status().is_over() {
            let side = self.current;
            let action = match side {
                Side::Player => player.provide_action(side, self),
                Side::Opponent => opponent.provide_action(side, self),
            };
            let result = self.submit(phase, side, &action, env);
            submitted += 1;

            // Rejected input keeps the turn; fall back to waiting so a
            // misbehaving provider cannot stall the loop.
            if result.is_rejected() && submitted < max_actions && !self.status().is_over() {
                self.submit(phase, side, &Action::wait(), env);
                submitted += 1;
            }
        }

        let status = self.status();
        tracing::info!(?status, actions = self.history.len(), "encounter finished");
        status
    }

    /// Source id of an attack that does not come from `side`'s combatant.
    fn foreign_source(&self, side: Side, action: &Action) -> Option<CombatantId> {
        match action {
            Action::Attack(attack) if attack.source != self.combatant(side).id() => {
                Some(attack.source)
            }
            _ => None,
        }
    }

    fn close_turn(&mut self, side: Side, result: &FightResult, env: &FightEnv<'_>) {
        // A failed flee already spent the actor's turn.
        if !matches!(result.outcome(), Outcome::FleeFailed { .. }) {
            let summary = self.combatant_mut(side).fight_manager(env).advance_turn();
            for tick in &summary.ticks {
                tracing::debug!(%side, kind = %tick.kind, amount = tick.amount, "status tick");
            }
        }
        self.current = side.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::AttackAction;
    use crate::config::{CombatConfig, FleePolicy};
    use crate::result::ResultKind;
    use crate::state::Turn;

    fn encounter(config: &CombatConfig) -> Encounter {
        Encounter::new(
            Combatant::new(CombatantId::PLAYER, "hero", config).unwrap(),
            Combatant::new(CombatantId(1), "goblin", config).unwrap(),
        )
    }

    #[test]
    fn attacks_land_on_the_other_side() {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);

        let hit = fight.submit(
            GamePhase::Fight,
            Side::Player,
            &Action::attack(AttackAction::new(CombatantId::PLAYER, 30)),
            &env,
        );
        assert_eq!(hit.applied_damage(), 30);
        assert_eq!(fight.combatant(Side::Opponent).health().current(), 70);
        assert_eq!(fight.combatant(Side::Player).turn(), Turn(1));
        assert_eq!(fight.current_side(), Side::Opponent);
    }

    #[test]
    fn out_of_turn_input_is_rejected_without_side_effects() {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);

        let result = fight.submit(GamePhase::Fight, Side::Opponent, &Action::block(), &env);
        assert_eq!(
            result.outcome(),
            &Outcome::InvalidParameters(ParameterError::OutOfTurn)
        );
        assert!(!fight.combatant(Side::Opponent).is_blocking());
        assert_eq!(fight.current_side(), Side::Player);
    }

    #[test]
    fn illegal_phase_keeps_the_turn() {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);

        let result = fight.submit(GamePhase::Menu, Side::Player, &Action::block(), &env);
        assert_eq!(result.kind(), ResultKind::Illegal);
        assert_eq!(fight.current_side(), Side::Player);
        assert_eq!(fight.combatant(Side::Player).turn(), Turn::ZERO);
    }

    #[test]
    fn successful_flee_ends_the_encounter() {
        let config = CombatConfig::new().with_flee(FleePolicy::Always);
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);

        fight.submit(GamePhase::Fight, Side::Player, &Action::flee(), &env);
        assert_eq!(fight.status(), EncounterStatus::Escaped(Side::Player));

        let late = fight.submit(GamePhase::Fight, Side::Opponent, &Action::wait(), &env);
        assert_eq!(
            late.outcome(),
            &Outcome::InvalidParameters(ParameterError::EncounterOver)
        );
    }

    #[test]
    fn failed_flee_spends_exactly_one_turn() {
        let config = CombatConfig::new().with_flee(FleePolicy::Never);
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);

        fight.submit(GamePhase::Fight, Side::Player, &Action::flee(), &env);
        assert_eq!(fight.combatant(Side::Player).turn(), Turn(1));
        assert_eq!(fight.current_side(), Side::Opponent);
    }

    #[test]
    fn run_stops_at_victory() {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);
        let mut hero = ScriptedProvider::repeating(Action::attack(AttackAction::new(
            CombatantId::PLAYER,
            40,
        )));
        let mut goblin = WaitActionProvider;

        let status = fight.run(GamePhase::Fight, &mut hero, &mut goblin, &env, 100);
        assert_eq!(status, EncounterStatus::Victory(Side::Player));
        assert!(fight.combatant(Side::Opponent).is_defeated());
        assert_eq!(fight.history().len(), 5);
    }

    #[test]
    fn attacks_must_come_from_the_actor() {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);

        let forged = fight.submit(
            GamePhase::Fight,
            Side::Player,
            &Action::attack(AttackAction::new(CombatantId(99), 30)),
            &env,
        );
        assert_eq!(
            forged.outcome(),
            &Outcome::InvalidParameters(ParameterError::ForeignSource(CombatantId(99)))
        );
        assert_eq!(fight.combatant(Side::Opponent).health().current(), 100);
        assert_eq!(fight.combatant(Side::Player).turn(), Turn::ZERO);
        assert_eq!(fight.current_side(), Side::Player);

        fight.submit(GamePhase::Fight, Side::Player, &Action::wait(), &env);
        let borrowed = fight.submit(
            GamePhase::Fight,
            Side::Opponent,
            &Action::attack(AttackAction::new(CombatantId::PLAYER, 30)),
            &env,
        );
        assert_eq!(
            borrowed.outcome(),
            &Outcome::InvalidParameters(ParameterError::ForeignSource(CombatantId::PLAYER))
        );
        assert_eq!(fight.combatant(Side::Player).health().current(), 100);
        assert_eq!(fight.current_side(), Side::Opponent);
    }

    #[test]
    fn run_limit_counts_fallback_waits() {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut fight = encounter(&config);
        let mut hero = WaitActionProvider;
        let mut goblin = WaitActionProvider;

        // Outside a fight every action is illegal, so each one draws a fallback.
        let status = fight.run(GamePhase::Menu, &mut hero, &mut goblin, &env, 5);
        assert_eq!(status, EncounterStatus::Ongoing);
        assert_eq!(fight.history().len(), 5);
        assert_eq!(fight.combatant(Side::Player).turn(), Turn::ZERO);
        assert_eq!(fight.current_side(), Side::Player);
    }
}
