//! Rule scenarios driven by scripted dice.

use ludo_race::core::{GameConfig, GameState, GameStatus, PiecePosition, ScriptedDice, Team};
use ludo_race::rules::GameEngine;

use PiecePosition::{Finished, Home, OnTrack};

fn engine_at(
    blue: [PiecePosition; 6],
    red: [PiecePosition; 6],
    turn: Team,
    rolls: &[u8],
) -> GameEngine<ScriptedDice> {
    let config = GameConfig::default();
    let state = GameState::from_layout(&config, blue, red, turn).unwrap();
    GameEngine::with_state(config, state, ScriptedDice::new(rolls.iter().copied())).unwrap()
}

// =============================================================================
// Starting a Game
// =============================================================================

#[test]
fn test_new_game_layout() {
    let engine = GameEngine::new(GameConfig::default()).unwrap();
    let state = engine.state();

    for team in Team::ALL {
        assert_eq!(state.pieces(team), &[Home; 6]);
        assert_eq!(state.home_count(team), 0);
    }
    assert_eq!(state.turn(), Team::Blue);
    assert_eq!(state.winner(), None);
    assert_eq!(engine.status(), GameStatus::InProgress(Team::Blue));
}

#[test]
fn test_first_roll_enters_one_blue_piece_for_every_face() {
    for roll in 1..=6u8 {
        let mut engine =
            GameEngine::with_dice(GameConfig::default(), ScriptedDice::new([roll])).unwrap();
        let state = engine.roll_and_advance();

        let entered: Vec<_> = state
            .pieces(Team::Blue)
            .iter()
            .filter(|p| !p.is_home())
            .collect();
        assert_eq!(entered, vec![&OnTrack(roll)]);
        assert!(state.pieces(Team::Red).iter().all(|p| p.is_home()));
        assert_eq!(state.turn(), Team::Red);
    }
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_blue_lands_on_red_and_captures() {
    // Red's relative cell 10 is absolute cell 23, where Blue lands from 20.
    let mut engine = engine_at(
        [OnTrack(20), Finished, Finished, Finished, Finished, Finished],
        [OnTrack(10), Home, Home, Home, Home, Home],
        Team::Blue,
        &[3],
    );

    let state = engine.roll_and_advance();

    assert_eq!(state.piece(Team::Blue, 0), OnTrack(23));
    assert_eq!(state.piece(Team::Red, 0), Home);
    assert_eq!(state.home_count(Team::Blue), 5);
    assert_eq!(state.home_count(Team::Red), 0);
    assert_eq!(state.turn(), Team::Red);
}

#[test]
fn test_red_captures_blue_across_the_wrap() {
    // Red relative 15 is absolute (13 + 15) % 26 = 2, Blue's relative 2.
    let mut engine = engine_at(
        [OnTrack(2), OnTrack(8), Home, Home, Home, Home],
        [OnTrack(11), Finished, Finished, Finished, Finished, Finished],
        Team::Red,
        &[4],
    );

    let state = engine.roll_and_advance();

    assert_eq!(state.piece(Team::Red, 0), OnTrack(15));
    assert_eq!(state.piece(Team::Blue, 0), Home);
    assert_eq!(state.piece(Team::Blue, 1), OnTrack(8));
    assert_eq!(state.turn(), Team::Blue);
}

#[test]
fn test_landing_on_a_stack_captures_the_whole_stack() {
    // Two Blue pieces stacked on absolute cell 20; Red lands there.
    let mut engine = engine_at(
        [OnTrack(20), OnTrack(9), OnTrack(20), Home, Home, Home],
        [OnTrack(5), Finished, Finished, Finished, Finished, Finished],
        Team::Red,
        &[2],
    );

    let state = engine.roll_and_advance();

    assert_eq!(state.piece(Team::Red, 0), OnTrack(7));
    assert_eq!(state.piece(Team::Blue, 0), Home);
    assert_eq!(state.piece(Team::Blue, 1), OnTrack(9));
    assert_eq!(state.piece(Team::Blue, 2), Home);

    let capture = state.last_move().unwrap().capture.as_ref().unwrap();
    assert_eq!(capture.cell, 20);
    assert_eq!(capture.pieces.as_slice(), &[0, 2]);
}

#[test]
fn test_landing_next_to_opponent_does_not_capture() {
    let mut engine = engine_at(
        [OnTrack(20), Home, Home, Home, Home, Home],
        [OnTrack(5), Finished, Finished, Finished, Finished, Finished],
        Team::Red,
        &[1],
    );

    let state = engine.roll_and_advance();

    assert_eq!(state.piece(Team::Red, 0), OnTrack(6));
    assert_eq!(state.piece(Team::Blue, 0), OnTrack(20));
    assert!(state.last_move().unwrap().capture.is_none());
}

#[test]
fn test_finishing_move_does_not_wrap_into_a_capture() {
    // Red 22 + 6 passes the last cell. Wrapping around would reach
    // absolute (13 + 28) % 26 = 15, where Blue sits.
    let mut engine = engine_at(
        [OnTrack(15), Home, Home, Home, Home, Home],
        [OnTrack(22), Finished, Finished, Finished, Finished, Finished],
        Team::Red,
        &[6],
    );

    let state = engine.roll_and_advance();

    assert_eq!(state.piece(Team::Red, 0), Finished);
    assert_eq!(state.winner(), Some(Team::Red));
    assert_eq!(state.piece(Team::Blue, 0), OnTrack(15));
    assert!(state.last_move().unwrap().capture.is_none());
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_final_piece_finishing_wins_and_freezes_state() {
    let mut engine = engine_at(
        [OnTrack(25), Finished, Finished, Finished, Finished, Finished],
        [OnTrack(3), OnTrack(9), Home, Home, Home, Home],
        Team::Blue,
        &[2, 5, 6],
    );

    let won = engine.roll_and_advance().clone();
    assert_eq!(won.piece(Team::Blue, 0), Finished);
    assert_eq!(won.home_count(Team::Blue), 6);
    assert_eq!(won.winner(), Some(Team::Blue));
    assert_eq!(won.turn(), Team::Blue);

    for _ in 0..5 {
        assert_eq!(engine.roll_and_advance(), &won);
    }
    assert_eq!(engine.dice().rolls_served(), 1);
    assert_eq!(engine.status(), GameStatus::Finished(Team::Blue));
}

#[test]
fn test_restart_after_win() {
    let mut engine = engine_at(
        [OnTrack(25), Finished, Finished, Finished, Finished, Finished],
        [Home; 6],
        Team::Blue,
        &[1],
    );
    engine.roll_and_advance();
    assert!(engine.status().is_over());

    let fresh = engine.new_game().clone();
    assert_eq!(fresh, GameState::new(engine.config()));

    engine.roll_and_advance();
    assert_eq!(engine.state().piece(Team::Blue, 0), OnTrack(1));
    assert_eq!(engine.history().len(), 1);
}

// =============================================================================
// Custom Boards
// =============================================================================

#[test]
fn test_red_can_move_first() {
    let config = GameConfig::default().with_first_team(Team::Red);
    let mut engine = GameEngine::with_dice(config, ScriptedDice::new([2])).unwrap();

    let state = engine.roll_and_advance();
    assert_eq!(state.piece(Team::Red, 0), OnTrack(2));
    assert_eq!(state.turn(), Team::Blue);
}

#[test]
fn test_small_board_plays_out() {
    let config = GameConfig::default()
        .with_track_length(10)
        .with_pieces_per_team(2)
        .with_start_offset(Team::Red, 5)
        .with_seed(3);
    let mut engine = GameEngine::new(config).unwrap();

    let winner = engine.play_to_completion(10_000).expect("small game should finish");
    assert_eq!(engine.state().home_count(winner), 2);
    assert!(engine.history().iter().all(|m| m.roll >= 1 && m.roll <= 6));
}
