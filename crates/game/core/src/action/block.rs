use crate::action::CombatAction;
use crate::env::FightEnv;
use crate::phase::PhaseSet;
use crate::result::FightResult;
use crate::state::Combatant;

/// Raise the actor's guard so the next incoming attack is reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAction;

impl CombatAction for BlockAction {
    fn name(&self) -> &'static str {
        "block"
    }

    fn acceptable_phases(&self) -> PhaseSet {
        PhaseSet::FIGHT
    }

    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        target.fight_manager(env).block()
    }
}
