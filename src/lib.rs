//! # ludo-race
//!
//! A two-team race-board game engine. Blue and Red each race six pieces
//! around a shared 26-cell track. Every turn the team to move rolls a die
//! and advances one piece; landing on an opposing piece sends it back home.
//! The first team to bring all six pieces around the track wins.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a `GameEngine` owns its `GameState` exclusively.
//!    Independent games are independent engines; there is no global state.
//!
//! 2. **Explicit positions**: a piece is `Home`, `OnTrack(cell)` or
//!    `Finished`. No sentinel cell numbers.
//!
//! 3. **Injectable randomness**: dice come from a `DiceSource`. `GameRng`
//!    is seeded and deterministic; `ScriptedDice` replays fixed sequences.
//!
//! ## Modules
//!
//! - `core`: Teams, piece positions, state, move records, dice, configuration
//! - `rules`: The `GameEngine` that applies turns
//!
//! ## Example
//!
//! ```
//! use ludo_race::{GameConfig, GameEngine, GameStatus};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(7)).unwrap();
//! let winner = engine.play_to_completion(100_000).unwrap();
//!
//! assert_eq!(engine.status(), GameStatus::Finished(winner));
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Team, TeamMap,
    PiecePosition,
    DiceSource, GameRng, ScriptedDice,
    GameConfig, ConfigError, StateError,
    Capture, MoveRecord,
    GameState, GameStatus,
};

pub use crate::rules::GameEngine;
