use crate::action::CombatAction;
use crate::env::FightEnv;
use crate::phase::PhaseSet;
use crate::result::FightResult;
use crate::state::Combatant;

/// Pass the turn without acting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction;

impl CombatAction for WaitAction {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn acceptable_phases(&self) -> PhaseSet {
        PhaseSet::FIGHT
    }

    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        target.fight_manager(env).wait()
    }
}
