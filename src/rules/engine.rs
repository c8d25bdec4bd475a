//! The game engine: owns one game's state and applies the rules.

use im::Vector;

use crate::core::{
    ConfigError, DiceSource, GameConfig, GameRng, GameState, GameStatus, MoveRecord,
    PiecePosition, StateError, Team,
};

/// Owns the authoritative `GameState` for one game.
///
/// Each call to `roll_and_advance` plays one turn:
///
/// 1. If a winner exists, nothing happens.
/// 2. The team to move picks a piece: its lowest-indexed `Home` piece if it
///    has one, otherwise a uniformly random piece on the track.
/// 3. The die is rolled and the piece advances. A `Home` piece enters at
///    the team-relative cell equal to the roll. A piece that would pass
///    the last cell is `Finished`.
/// 4. Opposing pieces on the landing cell are sent back to `Home`.
/// 5. Home counts are recomputed. If the mover has finished every piece it
///    wins; otherwise the turn passes to the other team.
///
/// All randomness comes from the injected `DiceSource`. Independent games
/// are independent engines.
///
/// ## Example
///
/// ```
/// use ludo_race::core::{GameConfig, Team};
/// use ludo_race::rules::GameEngine;
///
/// let mut engine = GameEngine::new(GameConfig::default()).unwrap();
/// let state = engine.roll_and_advance();
///
/// assert_eq!(state.turn(), Team::Red);
/// assert_eq!(state.pieces(Team::Blue).iter().filter(|p| p.is_on_track()).count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<D = GameRng> {
    config: GameConfig,
    dice: D,
    state: GameState,
    history: Vector<MoveRecord>,
}

impl GameEngine<GameRng> {
    /// Create an engine with seeded dice from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let dice = GameRng::new(config.seed);
        Self::with_dice(config, dice)
    }
}

impl<D: DiceSource> GameEngine<D> {
    /// Create an engine with a fresh game and the given dice.
    pub fn with_dice(config: GameConfig, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self {
            config,
            dice,
            state,
            history: Vector::new(),
        })
    }

    /// Create an engine resuming from an existing state.
    ///
    /// The state is checked against `config`. History starts empty.
    pub fn with_state(config: GameConfig, state: GameState, dice: D) -> Result<Self, StateError> {
        state.check(&config)?;
        Ok(Self {
            config,
            dice,
            state,
            history: Vector::new(),
        })
    }

    /// Discard the current game and start a fresh one.
    ///
    /// The dice are not reseeded, so consecutive games differ.
    pub fn new_game(&mut self) -> &GameState {
        self.state = GameState::new(&self.config);
        self.history = Vector::new();
        log::info!("new game, {} to move", self.state.turn());
        &self.state
    }

    /// Play one turn for the team to move and return the resulting state.
    ///
    /// A no-op once the game has a winner.
    ///
    /// # Panics
    ///
    /// Panics if the team to move has no piece that can move while no
    /// winner is set. That state is unreachable through the engine.
    pub fn roll_and_advance(&mut self) -> &GameState {
        if let Some(winner) = self.state.winner() {
            log::warn!("roll ignored: {} has already won", winner);
            return &self.state;
        }

        let team = self.state.turn();
        let piece = self.select_piece(team);
        let roll = self.dice.roll(self.config.die_faces);
        debug_assert!(
            (1..=self.config.die_faces).contains(&roll),
            "dice returned {} for a {}-sided die",
            roll,
            self.config.die_faces
        );

        let from = self.state.piece(team, piece);
        let to = from.advanced(roll, self.last_cell());
        self.state.set_piece(team, piece, to);

        let capture = match to {
            PiecePosition::OnTrack(cell) => {
                let landed = self.config.absolute_cell(team, usize::from(cell));
                self.state.capture_at(&self.config, team.other(), landed)
            }
            PiecePosition::Home | PiecePosition::Finished => None,
        };

        self.state.recompute_home_counts();

        let record = MoveRecord {
            team,
            roll,
            piece,
            from,
            to,
            capture,
            sequence: self.history.len() + 1,
        };
        log::debug!("{}", record);
        if let Some(capture) = &record.capture {
            log::info!(
                "{} captured {} {:?} on cell {}",
                team,
                team.other(),
                capture.pieces.as_slice(),
                capture.cell
            );
        }

        if self.state.home_count(team) == self.state.pieces(team).len() {
            self.state.set_winner(team);
            log::info!("{} wins after {} moves", team, record.sequence);
        } else {
            self.state.set_turn(team.other());
        }

        self.state.set_last_move(record.clone());
        self.history.push_back(record);

        &self.state
    }

    /// Roll until a team wins or `max_turns` turns have been played.
    ///
    /// Returns the winner, if the game finished.
    pub fn play_to_completion(&mut self, max_turns: usize) -> Option<Team> {
        for _ in 0..max_turns {
            if self.state.winner().is_some() {
                break;
            }
            self.roll_and_advance();
        }
        self.state.winner()
    }

    /// Choose which of `team`'s pieces moves this turn.
    fn select_piece(&mut self, team: Team) -> usize {
        if let Some(piece) = self.state.first_home_piece(team) {
            return piece;
        }

        let on_track = self.state.pieces_on_track(team);
        if on_track.is_empty() {
            panic!(
                "{} has no movable piece but no winner is set: {:?}",
                team,
                self.state.pieces(team)
            );
        }
        on_track[self.dice.pick(on_track.len())]
    }

    fn last_cell(&self) -> u8 {
        // Track length is validated to fit in a u8.
        self.config.last_cell() as u8
    }

    // === Accessors ===

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Moves made since the current game started, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The dice driving this engine.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }
}
