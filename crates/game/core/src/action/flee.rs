use crate::action::CombatAction;
use crate::env::FightEnv;
use crate::phase::PhaseSet;
use crate::result::FightResult;
use crate::state::Combatant;

/// Try to end the encounter early. Success is decided by the flee policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleeAction;

impl CombatAction for FleeAction {
    fn name(&self) -> &'static str {
        "flee"
    }

    fn acceptable_phases(&self) -> PhaseSet {
        PhaseSet::FIGHT
    }

    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        target.fight_manager(env).attempt_flee()
    }
}
