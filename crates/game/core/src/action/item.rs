use crate::action::CombatAction;
use crate::env::{FightEnv, ItemId};
use crate::phase::PhaseSet;
use crate::result::FightResult;
use crate::state::Combatant;

/// Consume one unit of an inventory item. Usable in and out of fights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub item: ItemId,
}

impl UseItemAction {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl CombatAction for UseItemAction {
    fn name(&self) -> &'static str {
        "use_item"
    }

    fn acceptable_phases(&self) -> PhaseSet {
        PhaseSet::EXPLORING | PhaseSet::FIGHT
    }

    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        target.fight_manager(env).use_item(self.item)
    }
}
