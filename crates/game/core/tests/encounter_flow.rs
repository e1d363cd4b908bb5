use fight_core::{
    Action, AttackAction, CombatConfig, Combatant, CombatantId, Encounter, EncounterStatus,
    FightEnv, FleePolicy, GamePhase, ItemDefinition, ItemEffect, ItemId, ItemTable, Outcome,
    ParameterError, ScriptedProvider, Side, StatusKind, Turn, UseItemAction, WaitActionProvider,
};

const POTION: ItemId = ItemId(1);
const VENOM: ItemId = ItemId(2);
const ANTIDOTE: ItemId = ItemId(3);

fn catalog() -> ItemTable {
    ItemTable::new([
        ItemDefinition::new(POTION, "potion", ItemEffect::Heal(30)),
        ItemDefinition::new(
            VENOM,
            "venom flask",
            ItemEffect::ApplyStatus {
                kind: StatusKind::Poisoned,
                turns: 3,
            },
        ),
        ItemDefinition::new(ANTIDOTE, "antidote", ItemEffect::Cure(StatusKind::Poisoned)),
    ])
}

fn strike(source: CombatantId, damage: u32) -> Action {
    Action::attack(AttackAction::new(source, damage))
}

#[test]
fn potion_heals_and_is_consumed() {
    let config = CombatConfig::default();
    let items = catalog();
    let env = FightEnv::new(&config).with_items(&items);
    let hero = Combatant::new(CombatantId::PLAYER, "hero", &config)
        .unwrap()
        .with_item(POTION, 1)
        .unwrap();
    let orc = Combatant::new(CombatantId(1), "orc", &config).unwrap();
    let mut fight = Encounter::new(hero, orc);
    let drink = Action::use_item(UseItemAction::new(POTION));

    fight.submit(GamePhase::Fight, Side::Player, &Action::wait(), &env);
    fight.submit(GamePhase::Fight, Side::Opponent, &strike(CombatantId(1), 50), &env);
    assert_eq!(fight.combatant(Side::Player).health().current(), 50);

    let healed = fight.submit(GamePhase::Fight, Side::Player, &drink, &env);
    assert_eq!(healed.magnitude(), 30);
    assert_eq!(fight.combatant(Side::Player).health().current(), 80);
    assert_eq!(fight.combatant(Side::Player).inventory().quantity(POTION), 0);

    fight.submit(GamePhase::Fight, Side::Opponent, &Action::wait(), &env);
    let empty = fight.submit(GamePhase::Fight, Side::Player, &drink, &env);
    assert_eq!(
        empty.outcome(),
        &Outcome::InvalidParameters(ParameterError::ItemNotHeld(POTION))
    );
    assert_eq!(fight.current_side(), Side::Player);
}

#[test]
fn poison_ticks_each_turn_until_cured() {
    let config = CombatConfig::default();
    let items = catalog();
    let env = FightEnv::new(&config).with_items(&items);
    let hero = Combatant::new(CombatantId::PLAYER, "hero", &config)
        .unwrap()
        .with_item(VENOM, 1)
        .unwrap()
        .with_item(ANTIDOTE, 1)
        .unwrap();
    let orc = Combatant::new(CombatantId(1), "orc", &config).unwrap();
    let mut fight = Encounter::new(hero, orc);

    // Poisoned from turn 0 until turn 3.
    fight.submit(
        GamePhase::Fight,
        Side::Player,
        &Action::use_item(UseItemAction::new(VENOM)),
        &env,
    );
    assert_eq!(fight.combatant(Side::Player).health().current(), 97);

    fight.submit(GamePhase::Fight, Side::Opponent, &Action::wait(), &env);
    fight.submit(GamePhase::Fight, Side::Player, &Action::wait(), &env);
    assert_eq!(fight.combatant(Side::Player).health().current(), 94);

    fight.submit(GamePhase::Fight, Side::Opponent, &Action::wait(), &env);
    let cured = fight.submit(
        GamePhase::Fight,
        Side::Player,
        &Action::use_item(UseItemAction::new(ANTIDOTE)),
        &env,
    );
    assert_eq!(cured.magnitude(), 1);
    assert_eq!(fight.combatant(Side::Player).health().current(), 94);
    assert_eq!(fight.combatant(Side::Player).turn(), Turn(3));
    assert!(fight.combatant(Side::Player).status_effects().is_empty());
}

#[test]
fn items_need_a_catalog() {
    let config = CombatConfig::default();
    let env = FightEnv::new(&config);
    let hero = Combatant::new(CombatantId::PLAYER, "hero", &config)
        .unwrap()
        .with_item(POTION, 1)
        .unwrap();
    let orc = Combatant::new(CombatantId(1), "orc", &config).unwrap();
    let mut fight = Encounter::new(hero, orc);

    let result = fight.submit(
        GamePhase::Fight,
        Side::Player,
        &Action::use_item(UseItemAction::new(POTION)),
        &env,
    );
    assert_eq!(
        result.outcome(),
        &Outcome::InvalidParameters(ParameterError::NoItemCatalog)
    );
    assert_eq!(fight.combatant(Side::Player).inventory().quantity(POTION), 1);
}

#[test]
fn scripted_duel_ends_with_opponent_fleeing() {
    let config = CombatConfig::new().with_flee(FleePolicy::Always);
    let env = FightEnv::new(&config);
    let hero = Combatant::new(CombatantId::PLAYER, "hero", &config).unwrap();
    let orc = Combatant::new(CombatantId(1), "orc", &config).unwrap();
    let mut fight = Encounter::new(hero, orc);

    let mut player = ScriptedProvider::new([strike(CombatantId::PLAYER, 25)]);
    let mut opponent = ScriptedProvider::new([Action::block(), Action::flee()]);

    let status = fight.run(GamePhase::Fight, &mut player, &mut opponent, &env, 50);
    assert_eq!(status, EncounterStatus::Escaped(Side::Opponent));
    assert_eq!(fight.combatant(Side::Opponent).health().current(), 75);
    assert_eq!(player.remaining(), 0);
}

#[test]
fn run_respects_the_action_limit() {
    let config = CombatConfig::default();
    let env = FightEnv::new(&config);
    let hero = Combatant::new(CombatantId::PLAYER, "hero", &config).unwrap();
    let orc = Combatant::new(CombatantId(1), "orc", &config).unwrap();
    let mut fight = Encounter::new(hero, orc).with_first_turn(Side::Opponent);

    let status = fight.run(
        GamePhase::Fight,
        &mut WaitActionProvider,
        &mut WaitActionProvider,
        &env,
        6,
    );
    assert_eq!(status, EncounterStatus::Ongoing);
    assert_eq!(fight.history().len(), 6);
    assert_eq!(fight.history()[0].side, Side::Opponent);
    assert_eq!(fight.combatant(Side::Player).turn(), Turn(3));
}
