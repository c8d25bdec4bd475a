//! Move records.
//!
//! Every successful `roll_and_advance` produces one `MoveRecord` describing
//! what was rolled, which piece moved, where it went and what it captured.
//! The engine keeps them as the game's history, and the latest one is
//! exposed on `GameState` for renderers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::PiecePosition;
use super::player::Team;

/// Opposing pieces sent back to `Home` by a move.
///
/// Every opposing piece on the landing cell is captured, so a stack of
/// two goes home together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Absolute track cell the capture happened on.
    pub cell: usize,

    /// Indices of the captured pieces within their team, ascending.
    pub pieces: SmallVec<[usize; 6]>,
}

/// A single completed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Team that moved.
    pub team: Team,

    /// Die value rolled.
    pub roll: u8,

    /// Index of the moved piece within its team.
    pub piece: usize,

    /// Position before the move.
    pub from: PiecePosition,

    /// Position after the move.
    pub to: PiecePosition,

    /// Opposing piece captured by this move, if any.
    pub capture: Option<Capture>,

    /// 1-based move number within the game.
    pub sequence: usize,
}

impl MoveRecord {
    /// Did this move bring a piece onto the track?
    #[must_use]
    pub fn entered(&self) -> bool {
        self.from.is_home() && self.to.is_on_track()
    }

    /// Did this move complete the track?
    #[must_use]
    pub fn finished(&self) -> bool {
        !self.from.is_finished() && self.to.is_finished()
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} rolled {}: piece {} {} -> {}",
            self.sequence, self.team, self.roll, self.piece, self.from, self.to
        )?;
        if let Some(capture) = &self.capture {
            write!(
                f,
                ", captured {} {:?} at cell {}",
                self.team.other(),
                capture.pieces.as_slice(),
                capture.cell
            )?;
        }
        Ok(())
    }
}
