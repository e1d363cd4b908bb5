//! Flee roll evaluation.

use crate::config::CombatConfig;
use crate::env::{RngOracle, compute_seed};
use crate::state::{CombatantId, HealthMeter, Turn};

/// Seed context reserved for flee rolls.
pub const FLEE_ROLL_CONTEXT: u32 = 1;

/// A flee attempt after the dice were cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleeRoll {
    /// Success chance in percent.
    pub chance: u32,
    /// Percentile roll in `1..=100`.
    pub roll: u32,
}

impl FleeRoll {
    /// Evaluates the configured policy for one combatant on one turn.
    pub fn cast(
        config: &CombatConfig,
        rng: &(impl RngOracle + ?Sized),
        combatant: CombatantId,
        turn: Turn,
        health: &HealthMeter,
    ) -> Self {
        let chance = config.flee.chance(health.current(), health.maximum());
        let seed = compute_seed(config.seed, turn.0, combatant.0, FLEE_ROLL_CONTEXT);
        Self {
            chance,
            roll: rng.roll_percent(seed),
        }
    }

    pub fn escaped(&self) -> bool {
        self.roll <= self.chance
    }
}
