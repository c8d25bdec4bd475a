//! Game state.
//!
//! ## GameState
//!
//! The authoritative snapshot of one game:
//! - Piece positions per team
//! - Finished-piece counts per team (derived, never set directly)
//! - Team to move
//! - Winner, once a team has finished every piece
//! - The most recent move
//!
//! Only the engine mutates a `GameState`. Callers receive shared
//! references and serialize or render them as they like.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Capture, MoveRecord};
use super::config::GameConfig;
use super::error::StateError;
use super::piece::PiecePosition;
use super::player::{Team, TeamMap};

/// One team's pieces, indexed by piece number.
pub type Pieces = SmallVec<[PiecePosition; 6]>;

/// Coarse game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given team to roll.
    InProgress(Team),
    /// The given team finished every piece. Terminal.
    Finished(Team),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// Complete state of one game.
///
/// Serializes to a plain structure:
///
/// ```json
/// {
///   "pieces": { "blue": [{"state": "home"}, ...], "red": [...] },
///   "home_count": { "blue": 0, "red": 0 },
///   "turn": "blue",
///   "winner": null,
///   "last_move": null
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pieces: TeamMap<Pieces>,
    home_count: TeamMap<usize>,
    turn: Team,
    winner: Option<Team>,
    last_move: Option<MoveRecord>,
}

impl GameState {
    /// Fresh game: every piece at `Home`, nobody finished, `first_team` to move.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pieces: TeamMap::new(|_| {
                SmallVec::from_elem(PiecePosition::Home, config.pieces_per_team)
            }),
            home_count: TeamMap::with_value(0),
            turn: config.first_team,
            winner: None,
            last_move: None,
        }
    }

    /// Build a state from explicit piece layouts.
    ///
    /// Home counts are derived from the layout. If one team has every
    /// piece finished it becomes the winner. The layout must fit the
    /// board and must not put opposing pieces on the same absolute cell.
    pub fn from_layout(
        config: &GameConfig,
        blue: impl IntoIterator<Item = PiecePosition>,
        red: impl IntoIterator<Item = PiecePosition>,
        turn: Team,
    ) -> Result<Self, StateError> {
        let mut state = Self {
            pieces: TeamMap {
                blue: blue.into_iter().collect(),
                red: red.into_iter().collect(),
            },
            home_count: TeamMap::with_value(0),
            turn,
            winner: None,
            last_move: None,
        };
        config.validate()?;
        state.recompute_home_counts();

        let full = |team: Team| state.home_count[team] == state.pieces[team].len();
        state.winner = match (full(Team::Blue), full(Team::Red)) {
            (true, true) => return Err(StateError::BothTeamsFinished),
            (true, false) => Some(Team::Blue),
            (false, true) => Some(Team::Red),
            (false, false) => None,
        };

        state.check(config)?;
        Ok(state)
    }

    /// Verify this state fits `config` and holds the board invariants.
    pub fn check(&self, config: &GameConfig) -> Result<(), StateError> {
        config.validate()?;

        let last_cell = config.last_cell();
        for (team, pieces) in self.pieces.iter() {
            if pieces.len() != config.pieces_per_team {
                return Err(StateError::WrongPieceCount {
                    team,
                    expected: config.pieces_per_team,
                    found: pieces.len(),
                });
            }
            for (piece, position) in pieces.iter().enumerate() {
                if let Some(cell) = position.cell() {
                    if usize::from(cell) > last_cell {
                        return Err(StateError::CellOutOfRange {
                            team,
                            piece,
                            cell,
                            last_cell,
                        });
                    }
                }
            }
        }

        for cell in self.occupied_cells(config, Team::Blue) {
            if self.occupant(config, Team::Red, cell).is_some() {
                return Err(StateError::SharedCell(cell));
            }
        }

        for (team, pieces) in self.pieces.iter() {
            let finished = pieces.iter().filter(|p| p.is_finished()).count();
            if self.home_count[team] != finished {
                return Err(StateError::StaleHomeCount {
                    team,
                    recorded: self.home_count[team],
                    actual: finished,
                });
            }
            if finished == pieces.len() && self.winner != Some(team) {
                return Err(StateError::MissingWinner(team));
            }
            if finished != pieces.len() && self.winner == Some(team) {
                return Err(StateError::UnearnedWinner {
                    team,
                    finished,
                    pieces: pieces.len(),
                });
            }
        }

        Ok(())
    }

    // === Accessors ===

    /// All of a team's pieces, in index order.
    #[must_use]
    pub fn pieces(&self, team: Team) -> &[PiecePosition] {
        &self.pieces[team]
    }

    /// A single piece's position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the team's piece count.
    #[must_use]
    pub fn piece(&self, team: Team, index: usize) -> PiecePosition {
        self.pieces[team][index]
    }

    /// Number of a team's pieces that are `Finished`.
    #[must_use]
    pub fn home_count(&self, team: Team) -> usize {
        self.home_count[team]
    }

    /// Team to move next.
    #[must_use]
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Winning team, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// The most recent move, if any has been made this game.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(team) => GameStatus::Finished(team),
            None => GameStatus::InProgress(self.turn),
        }
    }

    // === Queries ===

    /// Lowest-indexed piece still waiting at `Home`.
    #[must_use]
    pub fn first_home_piece(&self, team: Team) -> Option<usize> {
        self.pieces[team].iter().position(|p| p.is_home())
    }

    /// Indices of a team's pieces currently on the track.
    #[must_use]
    pub fn pieces_on_track(&self, team: Team) -> SmallVec<[usize; 6]> {
        self.pieces[team]
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_on_track())
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the first of `team`'s pieces on absolute `cell`.
    #[must_use]
    pub fn occupant(&self, config: &GameConfig, team: Team, cell: usize) -> Option<usize> {
        self.pieces[team].iter().position(|p| {
            p.cell()
                .is_some_and(|c| config.absolute_cell(team, usize::from(c)) == cell)
        })
    }

    /// Absolute cells occupied by `team`, in piece order.
    pub fn occupied_cells<'a>(
        &'a self,
        config: &'a GameConfig,
        team: Team,
    ) -> impl Iterator<Item = usize> + 'a {
        self.pieces[team]
            .iter()
            .filter_map(|p| p.cell())
            .map(move |c| config.absolute_cell(team, usize::from(c)))
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_piece(&mut self, team: Team, index: usize, position: PiecePosition) {
        self.pieces[team][index] = position;
    }

    /// Send every `victim` piece on absolute `cell` back to `Home`.
    pub(crate) fn capture_at(
        &mut self,
        config: &GameConfig,
        victim: Team,
        cell: usize,
    ) -> Option<Capture> {
        let mut pieces: SmallVec<[usize; 6]> = SmallVec::new();
        while let Some(piece) = self.occupant(config, victim, cell) {
            self.pieces[victim][piece] = PiecePosition::Home;
            pieces.push(piece);
        }

        if pieces.is_empty() {
            None
        } else {
            Some(Capture { cell, pieces })
        }
    }

    pub(crate) fn recompute_home_counts(&mut self) {
        self.home_count = self
            .pieces
            .map(|_, pieces| pieces.iter().filter(|p| p.is_finished()).count());
    }

    pub(crate) fn set_turn(&mut self, team: Team) {
        self.turn = team;
    }

    pub(crate) fn set_winner(&mut self, team: Team) {
        self.winner = Some(team);
    }

    pub(crate) fn set_last_move(&mut self, record: MoveRecord) {
        self.last_move = Some(record);
    }
}
