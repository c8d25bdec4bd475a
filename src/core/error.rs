//! Configuration and state errors.

use super::player::Team;

/// Reasons a `GameConfig` cannot drive a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("track length must be at least 2 cells")]
    TrackTooShort,
    #[error("track length {0} exceeds the supported maximum of 255 cells")]
    TrackTooLong(usize),
    #[error("each team needs at least one piece")]
    NoPieces,
    #[error("die must have at least one face")]
    NoDieFaces,
    #[error("a {faces}-sided die cannot fit on a {track_length}-cell track")]
    DieExceedsTrack { faces: u8, track_length: usize },
    #[error("{team} start offset {offset} is outside a {track_length}-cell track")]
    OffsetOutOfRange {
        team: Team,
        offset: usize,
        track_length: usize,
    },
}

/// Reasons a piece layout cannot be used as a game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{team} has {found} pieces, expected {expected}")]
    WrongPieceCount {
        team: Team,
        expected: usize,
        found: usize,
    },
    #[error("{team} piece {piece} is on cell {cell}, past the last cell {last_cell}")]
    CellOutOfRange {
        team: Team,
        piece: usize,
        cell: u8,
        last_cell: usize,
    },
    #[error("Blue and Red both occupy absolute cell {0}")]
    SharedCell(usize),
    #[error("{team} home count is {recorded} but {actual} pieces are finished")]
    StaleHomeCount {
        team: Team,
        recorded: usize,
        actual: usize,
    },
    #[error("{0} has every piece finished but is not the winner")]
    MissingWinner(Team),
    #[error("{team} is recorded as winner with only {finished} of {pieces} pieces finished")]
    UnearnedWinner {
        team: Team,
        finished: usize,
        pieces: usize,
    },
    #[error("both teams have every piece finished")]
    BothTeamsFinished,
}
