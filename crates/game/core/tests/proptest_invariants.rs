use fight_core::{
    Action, AttackAction, CombatAction, CombatConfig, Combatant, CombatantId, FightEnv,
    FleePolicy, GamePhase, HealthMeter, ItemDefinition, ItemEffect, ItemId, ItemTable, Outcome,
    ResultKind, StatusKind,
};
use proptest::prelude::*;

fn arb_phase() -> impl Strategy<Value = GamePhase> {
    prop::sample::select(GamePhase::all().collect::<Vec<_>>())
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u32..500)
            .prop_map(|damage| Action::attack(AttackAction::new(CombatantId::PLAYER, damage))),
        Just(Action::block()),
        Just(Action::flee()),
        Just(Action::wait()),
    ]
}

#[derive(Clone, Debug)]
enum Op {
    Block,
    Attack(u32),
    Flee,
    Wait,
    UseItem(ItemId),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Block),
        any::<u32>().prop_map(Op::Attack),
        Just(Op::Flee),
        Just(Op::Wait),
        (1u32..=3).prop_map(|id| Op::UseItem(ItemId(id))),
    ]
}

fn catalog() -> ItemTable {
    ItemTable::new([
        ItemDefinition::new(ItemId(1), "potion", ItemEffect::Heal(50)),
        ItemDefinition::new(
            ItemId(2),
            "ward",
            ItemEffect::ApplyStatus {
                kind: StatusKind::Shielded,
                turns: 3,
            },
        ),
    ])
}

proptest! {
    #[test]
    fn health_stays_within_bounds(
        maximum in 1u32..1_000,
        start in 0u32..1_000,
        hits in prop::collection::vec((any::<u32>(), any::<bool>()), 0..16),
    ) {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let health = HealthMeter::new(start.min(maximum), maximum).unwrap();
        let mut target = Combatant::from_health(CombatantId(3), "target", health);

        for (amount, block) in hits {
            if block {
                target.fight_manager(&env).block();
            }
            let before = target.health().current();
            let result = target.fight_manager(&env).receive_attack(amount, CombatantId(4));
            let after = target.health().current();

            prop_assert!(after <= maximum);
            prop_assert!(result.applied_damage() <= before);
            prop_assert_eq!(before - after, result.applied_damage());
            prop_assert_eq!(target.is_defeated(), after == 0);
        }
    }

    #[test]
    fn terminal_states_absorb_every_operation(
        fled in any::<bool>(),
        ops in prop::collection::vec(arb_op(), 1..20),
    ) {
        let config = CombatConfig::new().with_flee(FleePolicy::Always);
        let items = catalog();
        let env = FightEnv::new(&config).with_items(&items);
        let mut target = Combatant::new(CombatantId(5), "target", &config)
            .unwrap()
            .with_item(ItemId(1), 2)
            .unwrap()
            .with_item(ItemId(2), 1)
            .unwrap();
        if fled {
            target.fight_manager(&env).attempt_flee();
        } else {
            target.fight_manager(&env).receive_attack(u32::MAX, CombatantId(6));
        }
        let frozen = target.clone();
        let expected = if fled { Outcome::AlreadyFled } else { Outcome::AlreadyDefeated };

        for op in ops {
            let mut manager = target.fight_manager(&env);
            let result = match op {
                Op::Block => manager.block(),
                Op::Attack(amount) => manager.receive_attack(amount, CombatantId(6)),
                Op::Flee => manager.attempt_flee(),
                Op::Wait => manager.wait(),
                Op::UseItem(item) => manager.use_item(item),
            };
            prop_assert_eq!(result.outcome(), &expected);
            prop_assert_eq!(result.kind(), ResultKind::NoOp);
            prop_assert_eq!(&target, &frozen);
        }
    }

    #[test]
    fn legality_matches_acceptable_phases(action in arb_action(), phase in arb_phase()) {
        let config = CombatConfig::default();
        let env = FightEnv::new(&config);
        let mut target = Combatant::new(CombatantId(9), "target", &config).unwrap();
        let before = target.clone();

        let result = action.invoke(phase, &mut target, &env);
        let illegal = result.kind() == ResultKind::Illegal
            && matches!(result.outcome(), Outcome::IllegalPhase { .. });

        prop_assert_eq!(illegal, !action.acceptable_phases().allows(phase));
        if illegal {
            prop_assert_eq!(&target, &before);
        }
    }
}
