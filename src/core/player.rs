//! Team identification and per-team data storage.
//!
//! ## Team
//!
//! The two sides of the race: `Blue` and `Red`.
//!
//! ## TeamMap
//!
//! Fixed two-slot storage indexed by `Team`. Serializes as a plain
//! `{ "blue": .., "red": .. }` mapping so renderers can read it directly.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// Both teams in turn order.
    pub const ALL: [Team; 2] = [Team::Blue, Team::Red];

    /// The opposing team.
    ///
    /// ```
    /// use ludo_race::core::Team;
    ///
    /// assert_eq!(Team::Blue.other(), Team::Red);
    /// assert_eq!(Team::Red.other(), Team::Blue);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Blue => write!(f, "Blue"),
            Team::Red => write!(f, "Red"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_race::core::{Team, TeamMap};
///
/// let mut score: TeamMap<u32> = TeamMap::new(|_| 0);
/// score[Team::Red] += 2;
///
/// assert_eq!(score[Team::Blue], 0);
/// assert_eq!(score[Team::Red], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    pub blue: T,
    pub red: T,
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            blue: factory(Team::Blue),
            red: factory(Team::Red),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Blue => &self.blue,
            Team::Red => &self.red,
        }
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Blue => &mut self.blue,
            Team::Red => &mut self.red,
        }
    }

    /// Iterate over (Team, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::ALL.into_iter().map(move |team| (team, self.get(team)))
    }

    /// Apply a function to both entries.
    pub fn map<U>(&self, f: impl Fn(Team, &T) -> U) -> TeamMap<U> {
        TeamMap {
            blue: f(Team::Blue, &self.blue),
            red: f(Team::Red, &self.red),
        }
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
