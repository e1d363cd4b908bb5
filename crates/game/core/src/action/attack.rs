use crate::action::CombatAction;
use crate::env::FightEnv;
use crate::phase::PhaseSet;
use crate::result::{FightResult, ParameterError};
use crate::state::{Combatant, CombatantId};

/// Offensive action; the invoked combatant is the defender.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub source: CombatantId,
    /// Raw damage before the defender's mitigation.
    pub damage: u32,
    pub style: AttackStyle,
}

impl AttackAction {
    pub fn new(source: CombatantId, damage: u32) -> Self {
        Self {
            source,
            damage,
            style: AttackStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: AttackStyle) -> Self {
        self.style = style;
        self
    }
}

/// Weapon or skill used for the attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackStyle {
    #[default]
    Melee,
    Ranged,
    Spell,
}

impl CombatAction for AttackAction {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn acceptable_phases(&self) -> PhaseSet {
        PhaseSet::FIGHT
    }

    fn action_body(&self, target: &mut Combatant, env: &FightEnv<'_>) -> FightResult {
        if self.source == target.id() {
            return FightResult::invalid(ParameterError::SelfTarget);
        }
        tracing::debug!(source = %self.source, target = %target.id(), style = %self.style, "attack");
        target.fight_manager(env).receive_attack(self.damage, self.source)
    }
}
