//! Core game types: teams, pieces, state, moves, dice, configuration.
//!
//! Everything here is plain data plus small helpers. The rules that move
//! pieces live in `rules`.

pub mod player;
pub mod piece;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use player::{Team, TeamMap};
pub use piece::PiecePosition;
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice};
pub use config::{GameConfig, DIE_FACES, PIECES_PER_TEAM, TRACK_LENGTH};
pub use error::{ConfigError, StateError};
pub use action::{Capture, MoveRecord};
pub use state::{GameState, GameStatus, Pieces};
