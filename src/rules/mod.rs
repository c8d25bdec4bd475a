//! Game rules.
//!
//! `GameEngine` owns a game's state and is the only thing that changes it:
//! - Picks which piece moves
//! - Rolls and advances it
//! - Resolves captures
//! - Detects the winner and passes the turn

pub mod engine;

pub use engine::GameEngine;
