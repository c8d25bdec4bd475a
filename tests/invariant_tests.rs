//! Property tests: invariants hold after every turn of random games.

use proptest::prelude::*;

use ludo_race::core::{GameConfig, GameState, Team};
use ludo_race::rules::GameEngine;

/// Board configurations that validate.
///
/// Single-faced dice are left out: with equal start offsets both teams
/// enter on the same cell forever and capture each other in turn.
fn board() -> impl Strategy<Value = GameConfig> {
    (8usize..=40, 1usize..=6, 2u8..=6, any::<u64>())
        .prop_flat_map(|(track, pieces, faces, seed)| {
            (Just(track), Just(pieces), Just(faces), Just(seed), 0..track, 0..track)
        })
        .prop_map(|(track, pieces, faces, seed, blue, red)| {
            GameConfig::default()
                .with_track_length(track)
                .with_pieces_per_team(pieces)
                .with_die_faces(faces)
                .with_start_offset(Team::Blue, blue)
                .with_start_offset(Team::Red, red)
                .with_seed(seed)
        })
}

fn assert_settled(config: &GameConfig, state: &GameState) {
    for team in Team::ALL {
        let finished = state.pieces(team).iter().filter(|p| p.is_finished()).count();
        assert_eq!(state.home_count(team), finished);
    }

    for cell in state.occupied_cells(config, Team::Blue) {
        assert!(
            state.occupant(config, Team::Red, cell).is_none(),
            "both teams on cell {}",
            cell
        );
    }

    assert_eq!(state.check(config), Ok(()));
}

proptest! {
    #[test]
    fn prop_invariants_hold_every_turn(seed in any::<u64>(), turns in 1usize..400) {
        let config = GameConfig::default().with_seed(seed);
        let mut engine = GameEngine::new(config.clone()).unwrap();

        for _ in 0..turns {
            let before = engine.state().clone();
            let after = engine.roll_and_advance().clone();
            assert_settled(&config, &after);

            match before.winner() {
                Some(_) => {
                    prop_assert_eq!(&after, &before);
                }
                None if after.winner().is_none() => {
                    prop_assert_eq!(after.turn(), before.turn().other());
                }
                None => {
                    prop_assert_eq!(after.winner(), Some(before.turn()));
                    prop_assert_eq!(after.turn(), before.turn());
                }
            }
        }
    }

    #[test]
    fn prop_entering_never_lands_on_start_cell(seed in any::<u64>()) {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();
        engine.play_to_completion(300);

        for record in engine.history().iter().filter(|m| m.entered()) {
            prop_assert_eq!(record.to.cell(), Some(record.roll));
            prop_assert_ne!(record.to.cell(), Some(0));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_any_valid_board_finishes(config in board()) {
        let mut engine = GameEngine::new(config.clone()).unwrap();
        let winner = engine.play_to_completion(200_000);

        prop_assert!(winner.is_some());
        assert_settled(&config, engine.state());

        let frozen = engine.state().clone();
        engine.roll_and_advance();
        prop_assert_eq!(engine.state(), &frozen);
    }

    #[test]
    fn prop_seeded_engines_agree(seed in any::<u64>()) {
        let config = GameConfig::default().with_seed(seed);
        let mut a = GameEngine::new(config.clone()).unwrap();
        let mut b = GameEngine::new(config).unwrap();

        a.play_to_completion(500);
        b.play_to_completion(500);

        prop_assert_eq!(a.state(), b.state());
        prop_assert_eq!(a.history(), b.history());
    }
}
