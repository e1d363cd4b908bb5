//! A scripted two-sided encounter.

use anyhow::Result;
use fight_core::{
    Action, AttackAction, AttackStyle, CombatAction, CombatConfig, Combatant, CombatantId,
    Encounter, EncounterStatus, FightEnv, GamePhase, ItemId, ItemTable, PcgRng, ScriptedProvider,
    UseItemAction,
};

const HERO: CombatantId = CombatantId::PLAYER;
const GOBLIN: CombatantId = CombatantId(1);

const HEALING_POTION: ItemId = ItemId(1);
const WARD_SCROLL: ItemId = ItemId(5);

/// Everything a finished duel produced, in submission order.
#[derive(Clone, Debug)]
pub struct DuelReport {
    pub status: EncounterStatus,
    pub lines: Vec<String>,
}

/// Hero versus goblin, with content supplied by the caller.
pub struct Duel {
    config: CombatConfig,
    items: ItemTable,
}

impl Duel {
    pub fn new(config: CombatConfig, items: ItemTable) -> Self {
        Self { config, items }
    }

    pub fn run(&self, max_actions: usize) -> Result<DuelReport> {
        let rng = PcgRng;
        let env = FightEnv::with_all(&self.config, &self.items, &rng);
        let mut lines = Vec::new();

        let mut hero = Combatant::new(HERO, "Hero", &self.config)?
            .with_item(HEALING_POTION, 2)?
            .with_item(WARD_SCROLL, 1)?;
        let goblin = Combatant::new(GOBLIN, "Goblin", &self.config)?;

        // Prepare while still exploring; blocking is not possible yet.
        let ward = Action::use_item(UseItemAction::new(WARD_SCROLL));
        for action in [Action::block(), ward] {
            let result = action.invoke(GamePhase::Exploring, &mut hero, &env);
            lines.push(format!("[exploring] {result}"));
        }

        let mut encounter = Encounter::new(hero, goblin);
        let mut hero_script = ScriptedProvider::new([
            Action::attack(AttackAction::new(HERO, 22)),
            Action::block(),
            Action::use_item(UseItemAction::new(HEALING_POTION)),
        ])
        .then_repeat(Action::attack(AttackAction::new(HERO, 25)));
        let mut goblin_script = ScriptedProvider::new([
            Action::attack(AttackAction::new(GOBLIN, 18).with_style(AttackStyle::Ranged)),
            Action::attack(AttackAction::new(GOBLIN, 30)),
            Action::flee(),
        ])
        .then_repeat(Action::attack(AttackAction::new(GOBLIN, 15)));

        let status = encounter.run(
            GamePhase::Fight,
            &mut hero_script,
            &mut goblin_script,
            &env,
            max_actions,
        );

        for resolution in encounter.history() {
            lines.push(format!(
                "[{}] {} ({}): {}",
                resolution.side,
                resolution.action,
                resolution.result.kind(),
                resolution.result
            ));
        }

        Ok(DuelReport { status, lines })
    }
}
