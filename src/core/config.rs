//! Game configuration.
//!
//! The default configuration is the standard game: a 26-cell track, six
//! pieces per team, a six-sided die, Blue entering at cell 0 and Red at
//! cell 13, Blue moving first.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Team, TeamMap};

/// Number of cells on the standard shared track.
pub const TRACK_LENGTH: usize = 26;

/// Pieces owned by each team in the standard game.
pub const PIECES_PER_TEAM: usize = 6;

/// Faces on the standard die.
pub const DIE_FACES: u8 = 6;

/// Board and rule parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells on the shared track. Team-relative positions run `0..track_length`.
    pub track_length: usize,

    /// Pieces owned by each team.
    pub pieces_per_team: usize,

    /// Die faces; rolls are uniform in `1..=die_faces`.
    pub die_faces: u8,

    /// Absolute track cell each team's relative cell 0 maps to.
    pub start_offsets: TeamMap<usize>,

    /// Team that acts first after `new_game`.
    pub first_team: Team,

    /// Seed for the default dice source.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_length: TRACK_LENGTH,
            pieces_per_team: PIECES_PER_TEAM,
            die_faces: DIE_FACES,
            start_offsets: TeamMap {
                blue: 0,
                red: TRACK_LENGTH / 2,
            },
            first_team: Team::Blue,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the track length.
    pub fn with_track_length(mut self, cells: usize) -> Self {
        self.track_length = cells;
        self
    }

    /// Set the number of pieces per team.
    pub fn with_pieces_per_team(mut self, pieces: usize) -> Self {
        self.pieces_per_team = pieces;
        self
    }

    /// Set the number of die faces.
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    /// Set a team's start offset on the shared track.
    pub fn with_start_offset(mut self, team: Team, offset: usize) -> Self {
        self.start_offsets[team] = offset;
        self
    }

    /// Set the team that moves first.
    pub fn with_first_team(mut self, team: Team) -> Self {
        self.first_team = team;
        self
    }

    /// Set the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Last team-relative cell before a piece finishes.
    #[must_use]
    pub fn last_cell(&self) -> usize {
        self.track_length - 1
    }

    /// Map a team-relative cell to the shared absolute coordinate.
    #[must_use]
    pub fn absolute_cell(&self, team: Team, relative: usize) -> usize {
        (self.start_offsets[team] + relative) % self.track_length
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_length < 2 {
            return Err(ConfigError::TrackTooShort);
        }
        if self.track_length > usize::from(u8::MAX) {
            return Err(ConfigError::TrackTooLong(self.track_length));
        }
        if self.pieces_per_team == 0 {
            return Err(ConfigError::NoPieces);
        }
        if self.die_faces == 0 {
            return Err(ConfigError::NoDieFaces);
        }
        if usize::from(self.die_faces) >= self.track_length {
            return Err(ConfigError::DieExceedsTrack {
                faces: self.die_faces,
                track_length: self.track_length,
            });
        }
        for (team, &offset) in self.start_offsets.iter() {
            if offset >= self.track_length {
                return Err(ConfigError::OffsetOutOfRange {
                    team,
                    offset,
                    track_length: self.track_length,
                });
            }
        }
        Ok(())
    }
}
