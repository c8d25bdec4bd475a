//! Dice and piece-choice randomness.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws every random value through `DiceSource`
//! - **Deterministic**: `GameRng` produces the same sequence for the same seed
//! - **Scriptable**: `ScriptedDice` replays fixed rolls for tests and replays
//!
//! ```
//! use ludo_race::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let roll = a.roll(6);
//! assert!((1..=6).contains(&roll));
//! assert_eq!(roll, b.roll(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of die rolls and uniform piece choices.
pub trait DiceSource {
    /// Roll a die with `faces` sides, returning a value in `1..=faces`.
    fn roll(&mut self, faces: u8) -> u8;

    /// Pick an index uniformly from `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self, faces: u8) -> u8 {
        (**self).roll(faces)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Seeded dice backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG position, so a game's dice can be resumed mid-sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// Dice that replay fixed sequences.
///
/// Rolls and picks cycle once exhausted. Picks are reduced modulo the
/// requested length.
///
/// # Panics
///
/// `roll` panics if the scripted value is outside `1..=faces`.
///
/// ```
/// use ludo_race::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 5]);
/// assert_eq!(dice.roll(6), 3);
/// assert_eq!(dice.roll(6), 5);
/// assert_eq!(dice.roll(6), 3);
/// assert_eq!(dice.pick(4), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    picks: Vec<usize>,
    next_roll: usize,
    next_pick: usize,
}

impl ScriptedDice {
    /// Replay `rolls`; every pick returns the first candidate.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: Vec<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        Self {
            rolls,
            picks: vec![0],
            next_roll: 0,
            next_pick: 0,
        }
    }

    /// Replay `picks` for piece choices.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        let picks: Vec<usize> = picks.into_iter().collect();
        assert!(!picks.is_empty(), "ScriptedDice needs at least one pick");
        self.picks = picks;
        self.next_pick = 0;
        self
    }

    /// Number of rolls served so far.
    #[must_use]
    pub fn rolls_served(&self) -> usize {
        self.next_roll
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, faces: u8) -> u8 {
        let value = self.rolls[self.next_roll % self.rolls.len()];
        assert!(
            (1..=faces).contains(&value),
            "scripted roll {} is not a face of a {}-sided die",
            value,
            faces
        );
        self.next_roll += 1;
        value
    }

    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        value % len
    }
}
