//! Piece positions.

use serde::{Deserialize, Serialize};

/// Where a single piece is.
///
/// `OnTrack` holds the team-relative cell: 0 is the team's own start cell,
/// and the last cell is `track_length - 1`. The shared coordinate used for
/// captures comes from `GameConfig::absolute_cell`.
///
/// Serialized as `{"state": "home"}`, `{"state": "on_track", "cell": 4}` or
/// `{"state": "finished"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "cell", rename_all = "snake_case")]
pub enum PiecePosition {
    /// Waiting at the home base, not yet entered.
    #[default]
    Home,
    /// On the track at a team-relative cell.
    OnTrack(u8),
    /// Completed the track.
    Finished,
}

impl PiecePosition {
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, PiecePosition::Home)
    }

    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, PiecePosition::OnTrack(_))
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, PiecePosition::Finished)
    }

    /// Team-relative cell, if on the track.
    #[must_use]
    pub const fn cell(self) -> Option<u8> {
        match self {
            PiecePosition::OnTrack(cell) => Some(cell),
            _ => None,
        }
    }

    /// Position after advancing `steps` from here on a track whose last
    /// team-relative cell is `last_cell`.
    ///
    /// A `Home` piece enters at cell `steps`. An `OnTrack` piece that would
    /// pass `last_cell` becomes `Finished`. `Finished` never moves.
    ///
    /// ```
    /// use ludo_race::core::PiecePosition;
    ///
    /// assert_eq!(PiecePosition::Home.advanced(3, 25), PiecePosition::OnTrack(3));
    /// assert_eq!(PiecePosition::OnTrack(20).advanced(5, 25), PiecePosition::OnTrack(25));
    /// assert_eq!(PiecePosition::OnTrack(20).advanced(6, 25), PiecePosition::Finished);
    /// ```
    #[must_use]
    pub fn advanced(self, steps: u8, last_cell: u8) -> Self {
        match self {
            PiecePosition::Home => PiecePosition::OnTrack(steps.min(last_cell)),
            PiecePosition::OnTrack(cell) => {
                let target = u16::from(cell) + u16::from(steps);
                if target > u16::from(last_cell) {
                    PiecePosition::Finished
                } else {
                    PiecePosition::OnTrack(target as u8)
                }
            }
            PiecePosition::Finished => PiecePosition::Finished,
        }
    }
}

impl std::fmt::Display for PiecePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PiecePosition::Home => write!(f, "home"),
            PiecePosition::OnTrack(cell) => write!(f, "cell {}", cell),
            PiecePosition::Finished => write!(f, "finished"),
        }
    }
}
