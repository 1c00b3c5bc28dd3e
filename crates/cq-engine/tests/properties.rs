//! Property tests over random command scripts.

use cq_core::{
    GameData, Item, ItemId, Location, LocationId, PuzzleKind, Settings, SpecialAction, World,
};
use cq_engine::{EngineConfig, GameSession, PuzzleContext, PuzzleOutcome, Response};
use proptest::prelude::*;

const COMMANDS: &[&str] = &[
    "go east",
    "go west",
    "go south",
    "go outside",
    "pickup note",
    "pickup mug",
    "find coach carter",
    "drop note",
    "drop mug",
    "drop t-card",
    "drop",
    "undo",
    "look",
    "score",
    "inventory",
    "dance",
];

fn world() -> World {
    World::from_data(GameData {
        settings: Settings::default(),
        locations: vec![
            Location::new(LocationId(1), "Dorm", "Your dorm room.")
                .with_exit("go east", LocationId(2))
                .with_action("pickup mug")
                .with_item(ItemId(4)),
            Location::new(LocationId(2), "Circle", "A wide lawn.")
                .with_exit("go west", LocationId(1))
                .with_exit("go south", LocationId(8))
                .with_action("pickup note")
                .with_action("pickup mug")
                .with_item(ItemId(5)),
            Location::new(LocationId(8), "Gym", "Treadmills hum.")
                .with_exit("go outside", LocationId(2))
                .with_action("find coach carter")
                .with_action("pickup note")
                .with_action("pickup mug")
                .with_item(ItemId(1))
                .with_special(SpecialAction::Puzzle {
                    puzzle: PuzzleKind::Treadmill,
                    reward: Some(ItemId(1)),
                    points: 10,
                }),
        ],
        items: vec![
            Item::new(ItemId(1), "T-Card", LocationId(8)).with_target(LocationId(1)),
            Item::new(ItemId(4), "mug", LocationId(1)).with_target(LocationId(1)),
            Item::new(ItemId(5), "note", LocationId(2)),
        ],
    })
    .unwrap()
}

fn treadmill(_: PuzzleKind, ctx: &PuzzleContext<'_>) -> Option<PuzzleOutcome> {
    if ctx.arriving {
        None
    } else if ctx.moves_remaining % 2 == 0 {
        Some(PuzzleOutcome::success(ctx, 1))
    } else {
        Some(PuzzleOutcome::failure(2))
    }
}

fn script() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(COMMANDS), 0..40)
}

/// Every item sits in exactly one location or in the inventory.
fn assert_items_conserved(session: &GameSession) {
    for item in session.world().items() {
        let in_locations = session
            .world()
            .locations()
            .filter(|location| location.has_item(item.id))
            .count();
        let held = usize::from(session.player().has_item(item.id));
        assert_eq!(in_locations + held, 1, "item {} misplaced", item.name);
    }
}

fn placement(session: &GameSession) -> (LocationId, Vec<ItemId>, u32, Vec<Option<LocationId>>) {
    let mut inventory = session.player().inventory.clone();
    inventory.sort();
    let holders = session
        .world()
        .items()
        .map(|item| session.world().holder_of(item.id))
        .collect();
    (session.player().location, inventory, session.player().moves, holders)
}

proptest! {
    #[test]
    fn moves_only_grow_on_undo(commands in script()) {
        let mut session = GameSession::new(world(), EngineConfig::default().with_max_moves(20)).unwrap();
        for command in commands {
            let before = session.player().moves;
            let Ok(turn) = session.process(command, &mut treadmill) else {
                continue;
            };
            if !matches!(turn.response, Response::Undone(_)) {
                prop_assert!(session.player().moves <= before);
            }
        }
    }

    #[test]
    fn items_are_always_in_exactly_one_place(commands in script()) {
        let mut session = GameSession::new(world(), EngineConfig::default()).unwrap();
        assert_items_conserved(&session);
        for command in commands {
            let _ = session.process(command, &mut treadmill);
            assert_items_conserved(&session);
        }
    }

    #[test]
    fn undo_reverts_moves_pickups_and_drops(commands in script()) {
        let mut session = GameSession::new(world(), EngineConfig::default()).unwrap();
        for command in commands {
            let before = placement(&session);
            let log_len = session.log().len();
            let Ok(turn) = session.process(command, &mut treadmill) else {
                continue;
            };
            if turn.status.is_terminal() {
                break;
            }
            // An arrival at a puzzle location logs a second event.
            let undos = match turn.response {
                Response::Moved { arrival: Some(_), .. } => 2,
                Response::Moved { .. } | Response::PickedUp(_) | Response::Dropped(_) => 1,
                _ => 0,
            };
            if undos > 0 {
                let mut rewound = session.clone();
                for _ in 0..undos {
                    let undo = rewound.process("undo", &mut treadmill).unwrap();
                    prop_assert!(matches!(undo.response, Response::Undone(_)));
                }
                prop_assert_eq!(placement(&rewound), before);
                prop_assert_eq!(rewound.log().len(), log_len);
            }
        }
    }

    #[test]
    fn repeated_unmatched_drop_is_inert(repeats in 1usize..6) {
        let mut session = GameSession::new(world(), EngineConfig::default()).unwrap();
        session.process("go east", &mut treadmill).unwrap();
        let before = placement(&session);
        for _ in 0..repeats {
            let turn = session.process("drop laptop", &mut treadmill).unwrap();
            prop_assert_eq!(turn.response, Response::NotHeld("laptop".to_string()));
        }
        prop_assert_eq!(placement(&session), before);
        prop_assert_eq!(session.log().len(), 2);
    }
}

#[test]
fn golden_id_sequence() {
    let mut session = GameSession::new(world(), EngineConfig::default()).unwrap();
    session.process("go east", &mut treadmill).unwrap();
    let ids: Vec<LocationId> = session.log().id_sequence().collect();
    assert_eq!(ids, vec![LocationId(1), LocationId(2)]);
}

#[test]
fn entering_the_gym_reaches_the_host() {
    let mut session = GameSession::new(world(), EngineConfig::default()).unwrap();
    let mut calls = 0;
    let mut counting = |kind: PuzzleKind, ctx: &PuzzleContext<'_>| -> Option<PuzzleOutcome> {
        calls += 1;
        assert_eq!(kind, PuzzleKind::Treadmill);
        assert!(ctx.arriving);
        None
    };
    session.process("go east", &mut counting).unwrap();
    session.process("go south", &mut counting).unwrap();
    assert_eq!(calls, 1);

    let ids: Vec<u32> = session.log().id_sequence().map(|id| id.0).collect();
    assert_eq!(ids, vec![1, 2, 8, 8]);
}
